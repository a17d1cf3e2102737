//! Integration tests for the dashboard forwarding endpoints.
//!
//! Request validation happens before anything leaves the intranet, so
//! these assertions hold with the gateway down.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_clients_without_cookie_is_unauthorized() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/dash/clients", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_zero_page_is_rejected_before_forwarding() {
    let app = TestApp::new();
    let token = TestApp::token_with_exp(3600);

    let response = app
        .request("GET", "/api/dash/clients?page=0", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_loan_info_requires_both_ids() {
    let app = TestApp::new();
    let token = TestApp::token_with_exp(3600);

    let response = app
        .request("GET", "/api/dash/loan?loan_id=42", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_client_update_requires_an_id() {
    let app = TestApp::new();
    let token = TestApp::token_with_exp(3600);

    let response = app
        .request(
            "PUT",
            "/api/dash/clients",
            Some(json!({ "client": { "name": "sin id" } })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_backup_download_requires_a_path() {
    let app = TestApp::new();
    let token = TestApp::token_with_exp(3600);

    let response = app
        .request("GET", "/api/dash/backup/download", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_document_download_requires_an_id() {
    let app = TestApp::new();
    let token = TestApp::token_with_exp(3600);

    let response = app
        .request("GET", "/api/dash/pdfs/document", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_forwarding_failure_maps_to_bad_gateway() {
    let app = TestApp::new();
    let token = TestApp::token_with_exp(3600);

    let response = app
        .request("GET", "/api/dash/active", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["success"], false);
}
