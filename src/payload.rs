use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Command parameters sent as the `data` member of a WAPI request.
#[derive(Debug, Default)]
pub struct Payload {
    payload: JsonMap<String, JsonValue>,
}

impl Payload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given key-value pair.
    pub fn add<T: Into<JsonValue>>(mut self, key: &str, value: T) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }
}

impl From<Payload> for JsonValue {
    fn from(value: Payload) -> Self {
        JsonValue::Object(value.payload)
    }
}

/// The request envelope, serialized as `{"request": {...}}`.
#[derive(Debug, Serialize)]
pub(crate) struct Request<'a> {
    pub(crate) command: &'a str,
    pub(crate) auth: String,
    pub(crate) user: &'a str,
    pub(crate) test: u8,
    pub(crate) data: Option<JsonValue>,
    #[serde(rename = "clTRID")]
    pub(crate) command_id: &'a str,
}

impl Request<'_> {
    /// Serializes the request into the JSON document expected in the
    /// `request` form field.
    pub(crate) fn to_form_value(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct Wrapper<'r, 'a> {
            request: &'r Request<'a>,
        }

        serde_json::to_string(&Wrapper { request: self })
    }
}
