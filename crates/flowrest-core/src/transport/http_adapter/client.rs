use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::error::{CoreError, TransportError};

use super::super::Transport;
use super::connection::{join_url, parse_base_url};

/// Settings for the underlying `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 32,
        }
    }
}

/// REST transport over HTTP(S).
///
/// Bodies are returned for every HTTP status: the Flow REST API reports
/// failures as JSON envelopes, which the client classifies.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    next_id: AtomicU64,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport for `base_url` (for example
    /// `https://rest-mainnet.onflow.org/v1`) with default settings.
    pub fn new(base_url: &str) -> Result<Self, CoreError> {
        Self::with_config(base_url, HttpTransportConfig::default())
    }

    pub fn with_config(base_url: &str, config: HttpTransportConfig) -> Result<Self, CoreError> {
        let base_url = parse_base_url(base_url)?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| CoreError::InvalidEndpoint(format!("build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            next_id: AtomicU64::new(1),
        })
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn send(
        &self,
        id: u64,
        method: &'static str,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<String, TransportError> {
        let response = builder.send().await?;
        let status = response.status();

        let body = response.text().await?;
        debug!(http.id = id, http.method = method, http.path = path, %status, body_len = body.len(), "rest response");
        trace!(http.id = id, http.method = method, http.path = path, body = %body, "rest response body");

        Ok(body)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<String, TransportError> {
        let id = self.next_request_id();
        debug!(http.id = id, http.method = "GET", http.path = path, "rest request");

        let builder = self
            .client
            .get(join_url(&self.base_url, path))
            .header(header::ACCEPT, "application/json");
        self.send(id, "GET", path, builder).await
    }

    async fn post(&self, path: &str, body: String) -> Result<String, TransportError> {
        let id = self.next_request_id();
        debug!(
            http.id = id,
            http.method = "POST",
            http.path = path,
            body_len = body.len(),
            "rest request"
        );

        let builder = self
            .client
            .post(join_url(&self.base_url, path))
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        self.send(id, "POST", path, builder).await
    }
}
