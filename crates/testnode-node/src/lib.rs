//! Testnode Node - the testnode HTTP service and its in-process harness
//!
//! # Modules
//!
//! - [`server`] - Router, handler and socket serving
//! - [`harness`] - Socketless test client, response checks and scenarios
//!
//! # Example
//!
//! ```rust,no_run
//! use testnode_node::{create_router, harness::{scenario, TestClient}};
//!
//! # async fn demo() -> testnode_core::Result<()> {
//! let client = TestClient::new(create_router());
//! let response = scenario::testnode_endpoint_responds(&client).await?;
//! assert_eq!(response.status, 200);
//! # Ok(())
//! # }
//! ```

pub mod harness;
pub mod server;

pub use harness::{TestClient, TestResponse};
pub use server::{create_router, rest::TESTNODE_RESPONSE, TESTNODE_PATH};
