//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{HealthResponse, SystemInfo};
use crate::state::AppState;

/// GET /v1/healthcheck
pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "available".to_string(),
        system_info: SystemInfo {
            environment: state.server.environment.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
