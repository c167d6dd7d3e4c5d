//! Field-level validation accumulator.
//!
//! A [`Validator`] collects `(field, message)` pairs from a sequence of
//! independent checks. It is created per request, passed by `&mut` through
//! the validation functions, and dropped once the outcome is known.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single failed field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field as it appears on the wire.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

/// Accumulates field errors. Valid iff nothing was recorded.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    /// Record an error unconditionally.
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Whether no errors have been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded errors in the order the checks ran.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume the validator and return its errors.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Whether any error was recorded for `field`.
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Group field errors by field name, preserving per-field message order.
pub fn group_by_field(errors: &[FieldError]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for err in errors {
        grouped
            .entry(err.field.clone())
            .or_default()
            .push(err.message.clone());
    }
    grouped
}

/// Whether `value` is one of `permitted`.
pub fn permitted_value<T: PartialEq + ?Sized>(value: &T, permitted: &[&T]) -> bool {
    permitted.iter().any(|p| *p == value)
}
