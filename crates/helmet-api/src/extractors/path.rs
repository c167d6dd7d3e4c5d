//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use helmet_core::error::AppError;
use helmet_core::result::AppResult;

use crate::error::ApiError;

/// A positive helmet id taken from the `{id}` path segment.
///
/// Anything that is not a positive integer is reported as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelmetId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for HelmetId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError(AppError::not_found("invalid id parameter")))?;

        parse_id(&raw).map(Self).map_err(ApiError)
    }
}

/// Parses a positive integer id.
pub fn parse_id(s: &str) -> AppResult<i64> {
    match s.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::not_found(format!("invalid id parameter: {s}"))),
    }
}
