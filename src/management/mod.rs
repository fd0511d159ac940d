//! Management API entity lookups.
//!
//! Every lookup follows the same shape: build a query URL from the entity
//! name, GET it, decode the XML body into the entity type, and hand the
//! entity to the renderer. Entity types plug in through [`Entity`].
pub mod auth;
pub mod sequence;
pub mod transport;
pub mod xml;

use crate::table::Row;
use auth::HeaderProvider;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use thiserror::Error;
use transport::{Transport, TransportError};

pub use sequence::Sequence;
pub use xml::{decode, DecodeError};

/// Request headers, name to value.
pub type Headers = BTreeMap<String, String>;

/// A management resource that can be looked up by name and shown as a table.
pub trait Entity: DeserializeOwned {
    /// Human-readable kind used in log lines, e.g. `sequence`.
    const KIND: &'static str;
    /// Collection path appended to the REST base, e.g. `sequences`.
    const COLLECTION: &'static str;
    /// Query parameter carrying the entity name.
    const QUERY_PARAM: &'static str;

    /// Table rows in display order.
    fn rows(&self) -> Vec<Row>;
}

/// Failure kinds of a single entity lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unable to connect to {url}")]
    Unreachable {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error("invalid XML response")]
    InvalidResponse(#[source] DecodeError),
    /// Carries the HTTP status line verbatim.
    #[error("{0}")]
    Status(String),
}

impl FetchError {
    /// Whether the process should stop rather than log and carry on.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, FetchError::Status(_))
    }
}

/// Build `<base><collection>?<param>=<name>`. The name is inserted verbatim.
pub fn query_url(base: &str, collection: &str, param: &str, name: &str) -> String {
    format!("{base}{collection}?{param}={name}")
}

/// Transport, base URL and header provider for one CLI invocation.
pub struct ManagementClient<'a> {
    pub base_url: &'a str,
    pub transport: &'a dyn Transport,
    pub auth: &'a dyn HeaderProvider,
}

impl ManagementClient<'_> {
    /// Look up `name` in the entity's collection and decode the response.
    pub fn fetch_entity<E: Entity>(&self, name: &str) -> Result<E, FetchError> {
        let url = query_url(self.base_url, E::COLLECTION, E::QUERY_PARAM, name);
        tracing::info!(entity = E::KIND, url = %url, "request");

        let headers = self.auth.headers();
        let response = self
            .transport
            .get(&url, &headers)
            .map_err(|source| FetchError::Unreachable {
                url: url.clone(),
                source,
            })?;

        let status_line = response.status_line();
        tracing::info!(entity = E::KIND, status = %status_line, "response");

        if !response.is_ok() {
            return Err(FetchError::Status(status_line));
        }
        decode(&response.body).map_err(FetchError::InvalidResponse)
    }
}

#[cfg(test)]
#[path = "management_tests.rs"]
mod tests;
