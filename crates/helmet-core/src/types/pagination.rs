//! Pagination metadata returned alongside list results.

use serde::{Deserialize, Serialize};

/// Summary of a paginated listing.
///
/// Zero-valued fields are omitted on the wire, so an empty result set
/// serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Page that was returned (1-based).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub current_page: i64,
    /// Requested page size.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub page_size: i64,
    /// Always 1 when any records exist.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub first_page: i64,
    /// Number of the final page; equals the page count.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_page: i64,
    /// Total records matching the filters across all pages.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_records: i64,
}

impl Metadata {
    /// Compute metadata from the windowed total count.
    ///
    /// Returns all zeroes when there are no records (or a degenerate page
    /// size), so the page count is 0 and nothing is divided.
    pub fn calculate(total_records: i64, page: i64, page_size: i64) -> Self {
        if total_records <= 0 || page_size <= 0 {
            return Self::default();
        }

        Self {
            current_page: page,
            page_size,
            first_page: 1,
            last_page: (total_records + page_size - 1) / page_size,
            total_records,
        }
    }

    /// Number of pages.
    pub fn total_pages(&self) -> i64 {
        self.last_page
    }
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}
