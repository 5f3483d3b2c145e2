//! Collected responses and their checks

use axum::http::{header, HeaderMap, StatusCode};

use testnode_core::{Result, TestnodeError};

/// A fully received response
#[derive(Debug, Clone)]
pub struct TestResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body decoded as UTF-8
    pub text: String,
}

impl TestResponse {
    /// Content-Type header, if present and printable
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Check the status code
    pub fn expect_status(&self, expected: StatusCode) -> Result<&Self> {
        if self.status != expected {
            return Err(TestnodeError::AssertionFailed {
                field: "status",
                expected: expected.as_u16().to_string(),
                actual: self.status.as_u16().to_string(),
            });
        }
        Ok(self)
    }

    /// Check the body byte-for-byte
    pub fn expect_text(&self, expected: &str) -> Result<&Self> {
        if self.text != expected {
            return Err(TestnodeError::AssertionFailed {
                field: "text",
                expected: expected.to_string(),
                actual: self.text.clone(),
            });
        }
        Ok(self)
    }
}
