use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors reported by the WAPI itself, or values it sent that this crate
/// doesn't know how to represent.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The response code didn't start with `1`. Holds the whole decoded
    /// response envelope.
    #[error("WAPI error: {0}")]
    Response(JsonValue),
    #[error("unknown record type {0:?}")]
    UnknownRecordType(String),
    #[error("unknown domain status {0:?}")]
    UnknownDomainStatus(String),
}

impl ApiError {
    /// Returns the raw response envelope, if this error came from one.
    pub fn response(&self) -> Option<&JsonValue> {
        match self {
            ApiError::Response(response) => Some(response),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error("missing field in response: {0}")]
    MissingField(&'static str),
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
