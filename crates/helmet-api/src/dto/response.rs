//! Response DTOs.

use serde::Serialize;

use helmet_core::types::Metadata;
use helmet_entity::Helmet;

/// `{"helmet": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct HelmetEnvelope {
    /// The helmet.
    pub helmet: Helmet,
}

/// `{"helmets": [...], "metadata": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct HelmetListEnvelope {
    /// Helmets on this page.
    pub helmets: Vec<Helmet>,
    /// Pagination summary.
    pub metadata: Metadata,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"available"` when the process answers.
    pub status: String,
    /// Build and deployment details.
    pub system_info: SystemInfo,
}

/// Build and deployment details.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    /// Configured environment label.
    pub environment: String,
    /// Crate version.
    pub version: String,
}
