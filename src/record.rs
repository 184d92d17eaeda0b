//! Type-safe DNS record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::{ApiError, ClientError};

/// Format of the timestamps the WAPI uses, e.g. `2024-01-01 00:00:00`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// TTL used when adding a record without specifying one, in seconds.
pub const DEFAULT_TTL: i64 = 1800;

/// Possible types a DNS record can have.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Type {
    A,
    Aaaa,
    Mx,
    Sshfp,
    Txt,
}

impl Type {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parses a record type as sent by the WAPI, ignoring case.
    ///
    /// # Errors
    /// - `UnknownRecordType` if the type isn't one of the supported ones
    pub fn parse(type_: &str) -> Result<Self, ApiError> {
        type_
            .parse()
            .map_err(|_| ApiError::UnknownRecordType(type_.to_uppercase()))
    }
}

/// A DNS record, or row in WAPI terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub ttl: i64,
    pub type_: Type,
    pub content: String,
    pub changed: NaiveDateTime,
    pub author_comment: String,
}

/// A row as it comes from `dns-rows-list`.
#[derive(Deserialize)]
struct Row {
    #[serde(rename = "ID", deserialize_with = "deserialize_to_i64")]
    id: i64,
    name: String,
    #[serde(deserialize_with = "deserialize_to_i64")]
    ttl: i64,
    rdtype: String,
    rdata: String,
    changed_date: String,
    #[serde(default)]
    author_comment: Option<String>,
}

impl Record {
    /// Decodes a single row of a `dns-rows-list` response.
    ///
    /// # Errors
    /// - `Json` if a field is missing or a numeric field isn't a number
    /// - `Api` if the record type is unknown
    /// - `Timestamp` if the change date doesn't match [DATE_FORMAT]
    pub fn from_row(row: JsonValue) -> Result<Self, ClientError> {
        let row: Row = serde_json::from_value(row)?;

        Ok(Self {
            id: row.id,
            name: row.name,
            ttl: row.ttl,
            type_: Type::parse(&row.rdtype)?,
            content: row.rdata,
            changed: NaiveDateTime::parse_from_str(&row.changed_date, DATE_FORMAT)?,
            author_comment: row.author_comment.unwrap_or_default(),
        })
    }

    /// Converts the record into its plain, serializable form.
    pub fn to_dict(&self) -> RecordDict {
        RecordDict::from(self)
    }
}

impl TryFrom<JsonValue> for Record {
    type Error = ClientError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Record::from_row(value)
    }
}

/// A [Record] with the type and timestamp rendered as strings, for dumping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDict {
    pub id: i64,
    pub name: String,
    pub ttl: i64,
    pub record_type: String,
    pub content: String,
    pub changed: String,
    pub author_comment: String,
}

impl From<&Record> for RecordDict {
    fn from(value: &Record) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            ttl: value.ttl,
            record_type: value.type_.as_str().to_string(),
            content: value.content.clone(),
            changed: value.changed.format(DATE_FORMAT).to_string(),
            author_comment: value.author_comment.clone(),
        }
    }
}

impl From<Record> for RecordDict {
    fn from(value: Record) -> Self {
        RecordDict::from(&value)
    }
}

/// Helper type for deserializing a string or an i64 to an i64.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrI64 {
    I64(i64),
    String(String),
}

pub(crate) fn deserialize_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = StringOrI64::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        StringOrI64::I64(i) => i,
        StringOrI64::String(s) => s.parse().map_err(D::Error::custom)?,
    })
}

#[cfg(test)]
mod tests;
