//! Named scenarios run against a [`TestClient`]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use tower::{BoxError, Service};
use tracing::info;

use testnode_core::Result;

use super::{TestClient, TestResponse};
use crate::server::{rest::TESTNODE_RESPONSE, TESTNODE_PATH};

/// `GET /testNode` must answer 200 with the fixed body.
///
/// Returns the response on success so callers can inspect it further.
pub async fn testnode_endpoint_responds<S>(client: &TestClient<S>) -> Result<TestResponse>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Error: Into<BoxError>,
{
    let response = client.get(TESTNODE_PATH).await?;
    response
        .expect_status(StatusCode::OK)?
        .expect_text(TESTNODE_RESPONSE)?;

    info!("Scenario passed: {} endpoint should return a response", TESTNODE_PATH);
    Ok(response)
}
