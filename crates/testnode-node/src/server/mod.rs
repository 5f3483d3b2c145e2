//! HTTP server
//!
//! Routes are matched exactly and case-sensitively: `/testnode` and
//! `/testNode/` fall through to axum's 404, other methods on `/testNode`
//! get a 405.

pub mod rest;

use axum::{routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use testnode_core::{Result, ServerConfig};

/// Path served by the testnode endpoint
pub const TESTNODE_PATH: &str = "/testNode";

/// Create the server router
pub fn create_router() -> Router {
    Router::new()
        .route(TESTNODE_PATH, get(rest::testnode))
        .layer(TraceLayer::new_for_http())
}

/// Bind a listener for the configured address (port 0 = auto-assign)
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    Ok(listener)
}

/// Serve the router on `listener` until `shutdown` resolves
pub async fn run<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = listener.local_addr()?;
    info!("testnode listening on http://{}{}", addr, TESTNODE_PATH);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("testnode server stopped");
    Ok(())
}
