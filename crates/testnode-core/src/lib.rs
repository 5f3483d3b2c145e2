//! Testnode Core - shared types for the testnode service
//!
//! # Modules
//!
//! - [`config`] - Server and harness configuration
//! - [`error`] - Error taxonomy separating transport and assertion failures

pub mod config;
pub mod error;

pub use config::{ClientConfig, ClientConfigBuilder, NodeConfig, ServerConfig};
pub use error::{Result, TestnodeError};
