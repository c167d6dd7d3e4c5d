//! Integration tests for the health endpoint and unmatched routes.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_healthcheck_reports_available() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/v1/healthcheck", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "available");
    assert_eq!(response.body["system_info"]["environment"], "development");
    assert!(response.body["system_info"]["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/v1/gloves", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_healthcheck_rejects_post() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/v1/healthcheck", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["error"], "METHOD_NOT_ALLOWED");
}
