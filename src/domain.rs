//! Handle for managing the DNS records of a single domain.

use std::fmt;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::record::{self, Record, RecordDict, Type};
use crate::{ApiError, Client, ClientError, Payload};

/// Possible states of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Status {
    Active,
}

impl Status {
    /// Gets the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parses a domain status as sent by the WAPI, ignoring case.
    ///
    /// # Errors
    /// - `UnknownDomainStatus` if the status isn't one of the known ones
    pub fn parse(status: &str) -> Result<Self, ApiError> {
        status
            .parse()
            .map_err(|_| ApiError::UnknownDomainStatus(status.to_uppercase()))
    }
}

/// A domain of the account, bound to the [Client] that opened it.
///
/// Holds no record state: every read goes to the WAPI. Additions and
/// removals are staged by the provider until [Domain::commit] is called.
pub struct Domain<'a> {
    client: &'a Client,
    name: String,
    is_primary: Option<bool>,
    status: Option<Status>,
}

impl<'a> Domain<'a> {
    pub(crate) fn new(client: &'a Client, name: &str) -> Self {
        Self {
            client,
            name: name.to_string(),
            is_primary: None,
            status: None,
        }
    }

    /// Decodes a single entry of a `dns-domains-list` response.
    pub(crate) fn from_entry(client: &'a Client, entry: JsonValue) -> Result<Self, ClientError> {
        #[derive(Deserialize)]
        struct Entry {
            name: String,
            #[serde(rename = "type")]
            type_: String,
            status: String,
        }

        let entry: Entry = serde_json::from_value(entry)?;

        Ok(Self {
            client,
            is_primary: Some(entry.type_ == "primary"),
            status: Some(Status::parse(&entry.status)?),
            name: entry.name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the provider is the primary nameserver for the domain.
    ///
    /// Only known for domains obtained from [Client::list_domains].
    pub fn is_primary(&self) -> Option<bool> {
        self.is_primary
    }

    /// Only known for domains obtained from [Client::list_domains].
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Retrieves all records of the domain.
    pub fn records(&self) -> Result<Vec<Record>, ClientError> {
        let payload = Payload::new().add("domain", self.name.as_str());
        let response = self
            .client
            .make_request("dns-rows-list", Some(payload), None)?;

        response
            .collection("row")?
            .into_iter()
            .map(Record::from_row)
            .collect()
    }

    /// Retrieves all records of the domain in their plain form.
    pub fn records_as_dicts(&self) -> Result<Vec<RecordDict>, ClientError> {
        Ok(self.records()?.iter().map(RecordDict::from).collect())
    }

    /// Stages a new record. The WAPI doesn't return the ID of the new record.
    ///
    /// When no `ttl` is given, [record::DEFAULT_TTL] is used.
    pub fn add_record(
        &self,
        name: &str,
        type_: Type,
        content: &str,
        ttl: Option<i64>,
    ) -> Result<(), ClientError> {
        let payload = Payload::new()
            .add("domain", self.name.as_str())
            .add("name", name)
            .add("ttl", ttl.unwrap_or(record::DEFAULT_TTL))
            .add("type", type_.as_str())
            .add("rdata", content);

        self.client
            .make_request("dns-row-add", Some(payload), None)?;
        Ok(())
    }

    /// Stages the removal of the given record.
    pub fn remove_record(&self, record: &Record) -> Result<(), ClientError> {
        let payload = Payload::new()
            .add("domain", self.name.as_str())
            .add("row_id", record.id);

        self.client
            .make_request("dns-row-delete", Some(payload), None)?;
        Ok(())
    }

    /// Publishes all staged changes of the domain.
    pub fn commit(&self) -> Result<(), ClientError> {
        let payload = Payload::new().add("name", self.name.as_str());

        self.client
            .make_request("dns-domain-commit", Some(payload), None)?;
        Ok(())
    }
}

impl fmt::Display for Domain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Domain<{}", self.name)?;
        if let Some(is_primary) = self.is_primary {
            f.write_str(if is_primary { ", PRIMARY" } else { ", SECONDARY" })?;
        }
        if let Some(status) = self.status {
            write!(f, ", {status}")?;
        }
        f.write_str(">")
    }
}

impl fmt::Debug for Domain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
