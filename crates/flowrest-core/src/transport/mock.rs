use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TransportError;

use super::Transport;

/// A request observed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<String>,
}

enum Reply {
    Body(String),
    Fail(String),
}

struct Route {
    method: &'static str,
    prefix: String,
    reply: Reply,
}

/// A mock transport for testing. Answers requests with canned bodies,
/// matched by method and path prefix in registration order, and records
/// every request it receives.
pub struct MockTransport {
    base_url: String,
    routes: Vec<Route>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            base_url: "http://mock.invalid/v1".into(),
            routes: Vec::new(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single recorded request; panics if there was not exactly one.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests[0].clone()
    }

    fn respond(
        &self,
        method: &'static str,
        path: &str,
        body: Option<String>,
    ) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_owned(),
            body,
        });

        let route = self
            .routes
            .iter()
            .find(|route| route.method == method && path.starts_with(&route.prefix))
            .ok_or_else(|| TransportError::Other(format!("no mock route for {method} {path}")))?;
        match &route.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Fail(message) => Err(TransportError::Other(message.clone())),
        }
    }
}

pub struct MockTransportBuilder {
    base_url: String,
    routes: Vec<Route>,
}

impl MockTransportBuilder {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_owned();
        self
    }

    pub fn with_get(mut self, prefix: &str, body: impl Into<String>) -> Self {
        self.routes.push(Route {
            method: "GET",
            prefix: prefix.to_owned(),
            reply: Reply::Body(body.into()),
        });
        self
    }

    pub fn with_post(mut self, prefix: &str, body: impl Into<String>) -> Self {
        self.routes.push(Route {
            method: "POST",
            prefix: prefix.to_owned(),
            reply: Reply::Body(body.into()),
        });
        self
    }

    /// Make every request whose path starts with `prefix` fail at the
    /// transport level, for either method.
    pub fn with_failure(mut self, prefix: &str, message: &str) -> Self {
        for method in ["GET", "POST"] {
            self.routes.push(Route {
                method,
                prefix: prefix.to_owned(),
                reply: Reply::Fail(message.to_owned()),
            });
        }
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            base_url: self.base_url,
            routes: self.routes,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<String, TransportError> {
        self.respond("GET", path, None)
    }

    async fn post(&self, path: &str, body: String) -> Result<String, TransportError> {
        self.respond("POST", path, Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_matching_route_wins_and_requests_are_recorded() {
        let mock = MockTransport::builder()
            .with_get("/transactions/", "tx")
            .with_get("/transaction_results/", "result")
            .with_post("/transactions", "submitted")
            .build();

        assert_eq!(mock.get("/transaction_results/ab").await.unwrap(), "result");
        assert_eq!(mock.get("/transactions/ab").await.unwrap(), "tx");
        assert_eq!(mock.post("/transactions", "{}".into()).await.unwrap(), "submitted");

        let requests = mock.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2].method, "POST");
        assert_eq!(requests[2].body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn unmatched_and_failing_routes_are_transport_errors() {
        let mock = MockTransport::builder()
            .with_failure("/accounts/", "connection refused")
            .build();

        let err = mock.get("/accounts/01").await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
        assert!(mock.get("/blocks").await.is_err());
    }
}
