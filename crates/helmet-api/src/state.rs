//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use helmet_core::config::ServerConfig;
use helmet_service::HelmetService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// HTTP server configuration
    pub server: Arc<ServerConfig>,
    /// Helmet service
    pub helmet_service: Arc<HelmetService>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(server: ServerConfig, helmet_service: HelmetService) -> Self {
        Self {
            server: Arc::new(server),
            helmet_service: Arc::new(helmet_service),
        }
    }
}
