//! Unified application error types for the helmet registry.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the `?` operator. The HTTP layer only needs the
//! [`ErrorKind`] to pick a response category.

use std::fmt;
use thiserror::Error;

use crate::validator::FieldError;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested record does not exist.
    NotFound,
    /// An update targeted a record that is no longer in the expected state.
    EditConflict,
    /// One or more field rules were violated.
    Validation,
    /// The request could not be decoded.
    BadRequest,
    /// The route exists but does not accept the request method.
    MethodNotAllowed,
    /// Any other failure reported by the backing store, including timeouts.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::EditConflict => write!(f, "EDIT_CONFLICT"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::MethodNotAllowed => write!(f, "METHOD_NOT_ALLOWED"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Every failed field rule, populated for [`ErrorKind::Validation`].
    pub field_errors: Vec<FieldError>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: Vec::new(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: Vec::new(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an edit-conflict error.
    pub fn edit_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EditConflict, message)
    }

    /// Create a validation error carrying all failed field rules.
    pub fn failed_validation(field_errors: Vec<FieldError>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: "one or more fields failed validation".to_string(),
            field_errors,
            source: None,
        }
    }

    /// Create a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// Create a method-not-allowed error.
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error is the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            field_errors: self.field_errors.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Validator;

    #[test]
    fn test_failed_validation_keeps_every_pair() {
        let mut v = Validator::new();
        v.check(false, "name", "must be provided");
        v.check(false, "year", "must be provided");
        v.check(false, "year", "must be greater than 1888");

        let err = AppError::failed_validation(v.into_errors());
        assert!(err.is(ErrorKind::Validation));
        assert_eq!(err.field_errors.len(), 3);
    }

    #[test]
    fn test_display_includes_kind() {
        let err = AppError::edit_conflict("record changed");
        assert_eq!(err.to_string(), "EDIT_CONFLICT: record changed");
    }

    #[test]
    fn test_config_error_is_configuration_kind() {
        let err: AppError = config::ConfigError::NotFound("server.port".to_string()).into();
        assert!(err.is(ErrorKind::Configuration));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("boom");
        let err = AppError::with_source(ErrorKind::Database, "query failed", io);
        let cloned = err.clone();
        assert!(cloned.source.is_none());
        assert_eq!(cloned.kind, ErrorKind::Database);
    }
}
