//! Core type definitions used across the workspace.

pub mod filters;
pub mod pagination;
pub mod sorting;

pub use filters::Filters;
pub use pagination::Metadata;
pub use sorting::{SortDirection, SortField};
