//! # helmet-service
//!
//! Business logic for the helmet registry. Services validate input with a
//! per-call [`Validator`](helmet_core::Validator) and only then reach the
//! [`HelmetStore`](helmet_database::HelmetStore); store errors pass
//! through unchanged.

pub mod helmet;

pub use helmet::{HelmetService, ListHelmets};
