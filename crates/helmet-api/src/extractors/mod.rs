//! Custom Axum extractors.

pub mod json;
pub mod pagination;
pub mod path;

pub use json::JsonBody;
pub use pagination::ListParams;
pub use path::HelmetId;
