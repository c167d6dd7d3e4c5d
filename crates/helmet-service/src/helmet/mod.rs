//! Helmet service.

pub mod service;

pub use service::{HelmetService, ListHelmets};
