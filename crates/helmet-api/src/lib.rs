//! # helmet-api
//!
//! HTTP API layer for the helmet registry built on Axum.
//!
//! Provides the REST endpoints, request logging and CORS middleware,
//! JSON/query/path extractors that map rejections onto the error taxonomy,
//! DTOs, and the error-to-response mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::serve;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
