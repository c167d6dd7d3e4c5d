//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use helmet_core::error::{AppError, ErrorKind};
use helmet_core::validator::group_by_field;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Field name to messages, for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// HTTP-facing wrapper so `AppError` can be returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code and machine-readable code for an error kind.
    pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
        match kind {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::EditConflict => (StatusCode::CONFLICT, "EDIT_CONFLICT"),
            ErrorKind::Validation => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ErrorKind::BadRequest => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ErrorKind::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = Self::status_for(err.kind);

        let message = match err.kind {
            ErrorKind::NotFound => "the requested resource could not be found".to_string(),
            ErrorKind::EditConflict => {
                "unable to update the record due to an edit conflict, please try again".to_string()
            }
            _ if status.is_server_error() => {
                tracing::error!(
                    kind = %err.kind,
                    error = %err.message,
                    source = ?err.source,
                    "Internal server error"
                );
                "the server encountered a problem and could not process your request".to_string()
            }
            _ => err.message.clone(),
        };

        let details = if err.field_errors.is_empty() {
            None
        } else {
            serde_json::to_value(group_by_field(&err.field_errors)).ok()
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
