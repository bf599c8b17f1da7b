#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Failures raised by a [`Transport`](crate::transport::Transport) before any
/// response body is available.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a non-HTTP transport (test doubles, proxies).
    #[error("{0}")]
    Other(String),
}

/// A structured error envelope returned by the REST service in place of the
/// requested record.
///
/// The service signals failure with a JSON object carrying a `code` field,
/// regardless of the HTTP status. The whole envelope is kept, and its
/// serialized form is the error message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("service error: {formatted}")]
pub struct ServiceError {
    code: Option<i64>,
    message: Option<String>,
    envelope: serde_json::Value,
    formatted: String,
}

impl ServiceError {
    pub fn from_envelope(envelope: serde_json::Value) -> Self {
        let code = envelope.get("code").and_then(serde_json::Value::as_i64);
        let message = envelope
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        let formatted = envelope.to_string();
        Self {
            code,
            message,
            envelope,
            formatted,
        }
    }

    /// Numeric `code`, when the service sent one as an integer.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// Human-readable `message` field of the envelope, if present.
    pub fn service_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The full serialized envelope.
    pub fn message(&self) -> &str {
        &self.formatted
    }

    pub fn envelope(&self) -> &serde_json::Value {
        &self.envelope
    }
}
