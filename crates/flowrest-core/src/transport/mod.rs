//! HTTP transport abstraction.
//!
//! Defines the [`Transport`] trait the REST client talks through and
//! provides a `reqwest` implementation ([`HttpTransport`]) plus a test mock
//! (`mock::MockTransport`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::{HttpTransport, HttpTransportConfig};

use async_trait::async_trait;

use crate::error::TransportError;

/// Minimal request/response capability the REST client needs.
///
/// Paths are relative to [`base_url`](Transport::base_url) and carry their
/// own query string. Implementations return the response body as text for
/// any HTTP status; only failures that leave no body to inspect are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base URL every path is resolved against.
    fn base_url(&self) -> &str;

    async fn get(&self, path: &str) -> Result<String, TransportError>;

    async fn post(&self, path: &str, body: String) -> Result<String, TransportError>;
}
