//! Search data sources.
//!
//! This module provides the two places people records come from:
//! - The remote people-search API (streamed NDJSON over HTTP)
//! - The local static dataset used as fallback and as suggestions

use crate::model::{ResultSet, TransportError};
use async_trait::async_trait;

pub mod dataset;
pub mod http;

pub use dataset::StaticDataset;
pub use http::{HttpPeopleSearch, DEFAULT_ENDPOINT, NDJSON_CONTENT_TYPE};

/// A remote people-search backend.
///
/// One call is one request/response cycle. Implementations report every
/// failure as a [`TransportError`]; deciding what to do about it is the
/// caller's job.
#[async_trait]
pub trait PeopleSearch: Send + Sync {
    /// Search for people matching the raw query text.
    async fn search(&self, query: &str) -> Result<ResultSet, TransportError>;
}
