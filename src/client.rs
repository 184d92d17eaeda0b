use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use url::Url;

use crate::domain::Domain;
use crate::payload::Request;
use crate::record::RecordDict;
use crate::{ClientBuilderError, ClientError, Payload, Response, auth};

/// The WAPI endpoint used when none is given to the builder.
pub const DEFAULT_ENDPOINT: &str = "https://api.wedos.com/wapi/json";

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    user: Option<String>,
    key: Option<String>,
    test_mode: bool,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            user: None,
            key: None,
            test_mode: false,
        }
    }

    /// Sets the API endpoint to the one given.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the WAPI user, usually the account's e-mail address.
    pub fn user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    /// Sets the WAPI password.
    pub fn key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Enables or disables test mode, see [Client::set_test_mode].
    pub fn test_mode(mut self, enabled: bool) -> Self {
        self.test_mode = enabled;
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, [DEFAULT_ENDPOINT] is used.
    ///
    /// # Errors
    /// - `MissingField` if a required field isn't added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let user = self
            .user
            .ok_or_else(|| ClientBuilderError::MissingField("user".to_string()))?;
        let key = self
            .key
            .ok_or_else(|| ClientBuilderError::MissingField("key".to_string()))?;

        let mut client = Client::new(&endpoint, &user, &key);
        client.set_test_mode(self.test_mode);
        Ok(client)
    }
}

/// API client.
pub struct Client {
    endpoint: Url,
    user: String,
    key: String,
    test_mode: bool,
    client: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client.
    pub fn new(endpoint: &Url, user: &str, key: &str) -> Self {
        Self {
            endpoint: endpoint.clone(),
            user: user.to_string(),
            key: key.to_string(),
            test_mode: false,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Enables or disables test mode.
    ///
    /// In test mode, the WAPI validates commands without carrying them out.
    /// Applies to all requests made after the call.
    pub fn set_test_mode(&mut self, enabled: bool) {
        self.test_mode = enabled;
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// Sends a single command to the WAPI.
    ///
    /// `command_id` is echoed back by the provider in [Response::command_id];
    /// when it's not given, the command name is used.
    ///
    /// # Errors
    /// - `Reqwest` if the request couldn't be sent or the body isn't JSON
    /// - `MissingField` if the body has no `response` envelope
    /// - `Api` if the response code doesn't signal success
    pub fn make_request(
        &self,
        command: &str,
        data: Option<Payload>,
        command_id: Option<&str>,
    ) -> Result<Response, ClientError> {
        let request = Request {
            command,
            auth: auth::digest(&self.user, &self.key),
            user: &self.user,
            test: self.test_mode.into(),
            data: data.map(JsonValue::from),
            command_id: command_id.unwrap_or(command),
        };
        log::debug!(
            "sending WAPI command {command} (clTRID {}, test {})",
            request.command_id,
            request.test
        );

        let body: JsonValue = self
            .client
            .post(self.endpoint.clone())
            .form(&[("request", request.to_form_value()?)])
            .send()?
            .error_for_status()?
            .json()?;
        log::trace!("WAPI response: {body}");

        let envelope = match body {
            JsonValue::Object(mut body) => body.remove("response"),
            _ => None,
        }
        .ok_or(ClientError::MissingField("response"))?;

        Response::from_envelope(envelope)
    }

    /// Calls the no-op command to check that the WAPI accepts our requests.
    ///
    /// Returns `false` if the WAPI responded with an error. Failing to reach
    /// the WAPI at all is still reported as an error.
    pub fn ping(&self) -> Result<bool, ClientError> {
        match self.make_request("ping", None, None) {
            Ok(_) => Ok(true),
            Err(ClientError::Api(e)) => {
                log::debug!("ping failed: {e}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Returns a handle for the given domain without contacting the WAPI.
    pub fn open_domain(&self, name: &str) -> Domain<'_> {
        Domain::new(self, name)
    }

    /// Retrieves all domains of the account.
    pub fn list_domains(&self) -> Result<Vec<Domain<'_>>, ClientError> {
        let response = self.make_request("dns-domains-list", None, None)?;

        response
            .collection("domain")?
            .into_iter()
            .map(|entry| Domain::from_entry(self, entry))
            .collect()
    }

    /// Retrieves the records of every domain of the account, keyed by the
    /// domain name in the order the WAPI lists the domains.
    ///
    /// Stops at the first domain whose records can't be retrieved.
    pub fn domains_snapshot(&self) -> Result<IndexMap<String, Vec<RecordDict>>, ClientError> {
        self.list_domains()?
            .into_iter()
            .map(|domain| Ok((domain.name().to_string(), domain.records_as_dicts()?)))
            .collect()
    }
}
