//! Responses for unmatched routes and methods.

use axum::http::Method;

use helmet_core::error::AppError;

use crate::error::ApiError;

/// Any path without a route.
pub async fn not_found() -> ApiError {
    ApiError(AppError::not_found("no route"))
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError(AppError::method_not_allowed(format!(
        "the {method} method is not supported for this resource"
    )))
}
