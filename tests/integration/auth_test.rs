//! Integration tests for session token handling.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_me_without_cookie_is_unauthorized() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_malformed_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/auth/me", None, Some("only.two"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let token = TestApp::token_with_exp(-3600);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_reaches_the_forwarding_layer() {
    // The test gateway is unreachable, so a valid token gets past the
    // extractor and fails on the outbound hop instead of with a 401.
    let app = TestApp::new();
    let token = TestApp::token_with_exp(3600);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_token_without_expiry_is_accepted() {
    let app = TestApp::new();
    let token = TestApp::token_from_payload(r#"{"sub":"tester"}"#);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_ne!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_needs_no_auth() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
