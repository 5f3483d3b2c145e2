//! Route matching policy
//!
//! The path is matched exactly and case-sensitively; there is no trailing
//! slash redirect.

use axum::http::{Method, StatusCode};

use testnode_node::{create_router, TestClient, TESTNODE_RESPONSE};

#[tokio::test]
async fn test_lowercase_path_not_found() {
    let client = TestClient::new(create_router());
    let response = client.get("/testnode").await.unwrap();

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_ne!(response.text, TESTNODE_RESPONSE);
}

#[tokio::test]
async fn test_trailing_slash_not_found() {
    let client = TestClient::new(create_router());
    let response = client.get("/testNode/").await.unwrap();

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let client = TestClient::new(create_router());
    let response = client.get("/").await.unwrap();

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_methods_not_allowed() {
    let client = TestClient::new(create_router());

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = client.request(method.clone(), "/testNode").await.unwrap();
        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{} /testNode should be rejected",
            method
        );
    }
}

#[tokio::test]
async fn test_head_served_without_body() {
    let client = TestClient::new(create_router());
    let response = client.request(Method::HEAD, "/testNode").await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.is_empty());
}

#[tokio::test]
async fn test_not_found_fails_scenario_as_assertion() {
    let client = TestClient::new(create_router());
    let response = client.get("/testnode").await.unwrap();

    let err = response.expect_status(StatusCode::OK).unwrap_err();
    assert!(err.is_assertion_failure());
    assert!(!err.is_transport_failure());
}
