//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use helmet_core::config::ServerConfig;
use helmet_database::InMemoryHelmetStore;
use helmet_service::HelmetService;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for direct inspection
    pub store: Arc<InMemoryHelmetStore>,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub fn new() -> Self {
        let store = Arc::new(InMemoryHelmetStore::new());
        let service = HelmetService::new(store.clone());
        let app_state = helmet_api::AppState::new(ServerConfig::default(), service);

        Self {
            router: helmet_api::build_router(app_state),
            store,
        }
    }

    /// Create a helmet through the API and return its id
    pub async fn create_helmet(&self, name: &str, year: i32) -> i64 {
        let response = self
            .request(
                "POST",
                "/v1/mhelmets",
                Some(serde_json::json!({
                    "name": name,
                    "year": year,
                    "material": "Carbon fiber",
                    "protection": "ECE 22.06",
                    "weight": 1.35,
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );

        response.body["helmet"]["id"]
            .as_i64()
            .expect("No id in create response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a literal body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}
