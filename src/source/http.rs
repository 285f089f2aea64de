//! HTTP people-search backend.
//!
//! Sends one POST per search and reads the streamed NDJSON body in full
//! before parsing it.

use crate::model::{ResultSet, TransportError};
use crate::parser;
use crate::source::PeopleSearch;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::Client;
use tracing::debug;

/// Default remote search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://torre.ai/api/entities/_searchStream";

/// Content type declared on search requests.
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// People search over HTTP.
///
/// The client keeps a cookie store, so any session cookie the server sets is
/// sent back on later searches. A configured cookie is attached to every
/// request on top of that. No request timeout is applied.
#[derive(Debug, Clone)]
pub struct HttpPeopleSearch {
    client: Client,
    endpoint: String,
    cookie: Option<String>,
}

impl HttpPeopleSearch {
    /// Build a backend for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialized.
    pub fn new(endpoint: impl Into<String>, cookie: Option<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            cookie,
        })
    }

    /// The endpoint searches are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// JSON request body: `{"query": "..."}`.
pub fn request_body(query: &str) -> String {
    serde_json::json!({ "query": query }).to_string()
}

#[async_trait]
impl PeopleSearch for HttpPeopleSearch {
    async fn search(&self, query: &str) -> Result<ResultSet, TransportError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, NDJSON_CONTENT_TYPE)
            .body(request_body(query));

        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let people = parser::parse_people(&body)?;
        debug!(count = people.len(), endpoint = %self.endpoint, "Remote search succeeded");
        Ok(people)
    }
}
