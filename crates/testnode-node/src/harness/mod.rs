//! In-process test harness
//!
//! [`TestClient`] drives any tower service that speaks axum requests, so the
//! application is handed in explicitly instead of being looked up globally.
//! No socket is opened: each request goes straight to a clone of the service
//! through `oneshot`.

pub mod response;
pub mod scenario;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use tower::{BoxError, Service, ServiceExt};
use tracing::{debug, warn};

use testnode_core::{ClientConfig, Result, TestnodeError};

pub use response::TestResponse;

/// Request-capable handle bound to an application service
#[derive(Debug, Clone)]
pub struct TestClient<S> {
    service: S,
    config: ClientConfig,
}

impl<S> TestClient<S> {
    /// Bind a client to `service` with the default timeout and body cap
    pub fn new(service: S) -> Self {
        Self {
            service,
            config: ClientConfig::default(),
        }
    }

    /// Bind a client to `service` with explicit settings
    pub fn with_config(service: S, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { service, config })
    }

    /// Settings in use by this client
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl<S> TestClient<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Error: Into<BoxError>,
{
    /// Issue a GET with no headers or body
    pub async fn get(&self, path: &str) -> Result<TestResponse> {
        self.request(Method::GET, path).await
    }

    /// Issue a bodiless request and wait, bounded by the configured timeout,
    /// for the full response
    pub async fn request(&self, method: Method, path: &str) -> Result<TestResponse> {
        let request = Request::builder()
            .method(method.clone())
            .uri(path)
            .body(Body::empty())
            .map_err(|e| TestnodeError::InvalidRequest(e.to_string()))?;

        let timeout = self.config.request_timeout;
        debug!(%method, path, ?timeout, "Dispatching in-process request");

        match tokio::time::timeout(timeout, self.exchange(request)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(%method, path, "No response within {:?}", timeout);
                Err(TestnodeError::Timeout { timeout })
            }
        }
    }

    async fn exchange(&self, request: Request<Body>) -> Result<TestResponse> {
        let response = self
            .service
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| {
                let err: BoxError = e.into();
                TestnodeError::Transport(err.to_string())
            })?;

        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(body, self.config.max_body_bytes)
            .await
            .map_err(|e| TestnodeError::Body(e.to_string()))?;
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| TestnodeError::InvalidUtf8(e.to_string()))?;

        debug!(status = %parts.status, len = text.len(), "Response received");

        Ok(TestResponse {
            status: parts.status,
            headers: parts.headers,
            text,
        })
    }
}
