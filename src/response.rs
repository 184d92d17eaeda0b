use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::record::{self, StringOrI64};
use crate::{ApiError, ClientError};

/// Code assumed when the provider leaves it out; it is not a success code.
const MISSING_CODE: &str = "3000";

/// A successful response envelope from the WAPI.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    #[serde(deserialize_with = "deserialize_code")]
    pub code: String,
    pub result: String,
    #[serde(deserialize_with = "record::deserialize_to_i64")]
    pub timestamp: i64,
    /// The correlation id sent with the request, echoed back.
    #[serde(rename = "clTRID")]
    pub command_id: String,
    /// The correlation id the provider assigned to the request.
    #[serde(rename = "svTRID")]
    pub server_command_id: String,
    pub command: String,
    #[serde(default)]
    pub data: Option<JsonValue>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub test: bool,
}

/// Returns whether the given response code signals success.
pub fn is_success_code(code: &str) -> bool {
    code.starts_with('1')
}

/// Returns the code of a raw response envelope as a string.
fn envelope_code(envelope: &JsonValue) -> String {
    match envelope.get("code") {
        Some(JsonValue::String(code)) => code.clone(),
        Some(JsonValue::Number(code)) => code.to_string(),
        _ => MISSING_CODE.to_string(),
    }
}

/// JSON values the provider uses for "nothing here".
fn is_empty(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
        JsonValue::Number(_) => false,
    }
}

impl Response {
    /// Checks the code of a raw response envelope and decodes it.
    ///
    /// # Errors
    /// - `Api` if the code doesn't start with `1`, holding the whole envelope
    /// - `Json` if a successful envelope is missing one of its fields
    pub(crate) fn from_envelope(envelope: JsonValue) -> Result<Self, ClientError> {
        let code = envelope_code(&envelope);
        if !is_success_code(&code) {
            log::warn!("WAPI rejected command with code {code}");
            return Err(ApiError::Response(envelope).into());
        }

        Ok(serde_json::from_value(envelope)?)
    }

    pub fn is_success(&self) -> bool {
        is_success_code(&self.code)
    }

    /// Returns the entries of the collection stored under `key` in the data.
    ///
    /// Empty data or an empty collection results in no entries. The provider
    /// sends collections either as arrays or as objects keyed by an index.
    pub(crate) fn collection(&self, key: &'static str) -> Result<Vec<JsonValue>, ClientError> {
        let data = match &self.data {
            Some(data) if !is_empty(data) => data,
            _ => return Ok(Vec::new()),
        };

        let collection = data.get(key).ok_or(ClientError::MissingField(key))?;
        if is_empty(collection) {
            return Ok(Vec::new());
        }

        match collection {
            JsonValue::Array(entries) => Ok(entries.clone()),
            JsonValue::Object(entries) => Ok(entries.values().cloned().collect()),
            _ => Err(ClientError::MissingField(key)),
        }
    }
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match StringOrI64::deserialize(deserializer)? {
        StringOrI64::I64(i) => i.to_string(),
        StringOrI64::String(s) => s,
    })
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(StringOrI64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Number(StringOrI64::I64(i))) => i == 1,
        Some(Flag::Number(StringOrI64::String(s))) => {
            s.parse::<i64>().map_err(D::Error::custom)? == 1
        }
        None => false,
    })
}
