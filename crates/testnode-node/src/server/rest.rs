//! REST endpoints

/// Body returned by the testnode endpoint
pub const TESTNODE_RESPONSE: &str = "Yes the testnode endpoint is working";

/// Liveness endpoint, unconditional and side-effect free
pub async fn testnode() -> &'static str {
    TESTNODE_RESPONSE
}
