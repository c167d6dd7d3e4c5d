//! # helmet-core
//!
//! Core crate for the helmet registry. Contains configuration schemas,
//! the unified error system, the field validator, and the
//! filtering/sorting/pagination types shared by every other crate.
//!
//! This crate has **no** internal dependencies on other registry crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;
pub mod validator;

pub use error::AppError;
pub use result::AppResult;
pub use validator::Validator;
