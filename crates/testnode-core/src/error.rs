//! Error types for the testnode service and harness
//!
//! Failures fall into two classes that must never be confused: transport
//! failures (the exchange did not complete) and assertion failures (it
//! completed, but with the wrong status or body).

use std::time::Duration;
use thiserror::Error;

/// Main error type for testnode operations
#[derive(Error, Debug)]
pub enum TestnodeError {
    // ===== Transport Errors =====
    /// No response arrived within the configured bound
    #[error("No response within {}", humantime::format_duration(*timeout))]
    Timeout { timeout: Duration },

    /// The handler service itself failed
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Request could not be constructed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response body could not be collected
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Response body was not UTF-8
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    // ===== Assertion Errors =====
    /// Response field did not hold the expected value
    #[error("Assertion failed on {field}: expected {expected:?}, got {actual:?}")]
    AssertionFailed {
        field: &'static str,
        expected: String,
        actual: String,
    },

    // ===== Infrastructure Errors =====
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TestnodeError {
    /// True for failures where no usable response was received
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            TestnodeError::Timeout { .. }
                | TestnodeError::Transport(_)
                | TestnodeError::InvalidRequest(_)
                | TestnodeError::Body(_)
                | TestnodeError::InvalidUtf8(_)
        )
    }

    /// True when a response arrived but did not match expectations
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, TestnodeError::AssertionFailed { .. })
    }
}

impl From<serde_json::Error> for TestnodeError {
    fn from(err: serde_json::Error) -> Self {
        TestnodeError::Config(err.to_string())
    }
}

/// Result type alias for testnode operations
pub type Result<T> = std::result::Result<T, TestnodeError>;
