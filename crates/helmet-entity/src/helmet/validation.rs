//! Field rules for helmets.

use chrono::{Datelike, Utc};

use helmet_core::validator::Validator;

use super::model::Helmet;

/// Longest accepted name, in bytes.
pub const MAX_NAME_BYTES: usize = 500;
/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1888;

/// Check `helmet` against the field rules using the current calendar year.
pub fn validate_helmet(v: &mut Validator, helmet: &Helmet) {
    validate_helmet_at(v, helmet, Utc::now().year());
}

/// Check `helmet` against the field rules, treating `current_year` as the
/// latest accepted release year. Every rule runs; none short-circuits.
pub fn validate_helmet_at(v: &mut Validator, helmet: &Helmet, current_year: i32) {
    v.check(!helmet.name.is_empty(), "name", "must be provided");
    v.check(
        helmet.name.len() <= MAX_NAME_BYTES,
        "name",
        "must not be more than 500 bytes long",
    );

    v.check(helmet.year != 0, "year", "must be provided");
    v.check(helmet.year >= MIN_YEAR, "year", "must be greater than 1888");
    v.check(
        helmet.year <= current_year,
        "year",
        "must not be in the future",
    );
}
