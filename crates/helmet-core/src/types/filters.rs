//! Client-requested pagination and sort parameters.

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::sorting::{SortDirection, SortField};
use crate::validator::{FieldError, Validator, permitted_value};

/// Largest page number a client may request.
pub const MAX_PAGE: i64 = 10_000_000;
/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;
/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Pagination and sorting parameters for a list query.
#[derive(Debug, Clone)]
pub struct Filters {
    /// Requested page (1-based).
    pub page: i64,
    /// Requested page size.
    pub page_size: i64,
    /// Requested sort key; a leading `-` means descending.
    pub sort: String,
    /// Sort keys the caller is allowed to request.
    pub sort_safelist: &'static [&'static str],
}

impl Filters {
    /// Create filters with an explicit safelist.
    pub fn new(
        page: i64,
        page_size: i64,
        sort: impl Into<String>,
        sort_safelist: &'static [&'static str],
    ) -> Self {
        Self {
            page,
            page_size,
            sort: sort.into(),
            sort_safelist,
        }
    }

    /// Run the page, page-size and sort checks.
    pub fn validate(&self, v: &mut Validator) {
        v.check(self.page > 0, "page", "must be greater than zero");
        v.check(
            self.page <= MAX_PAGE,
            "page",
            "must be a maximum of 10 million",
        );
        v.check(self.page_size > 0, "page_size", "must be greater than zero");
        v.check(
            self.page_size <= MAX_PAGE_SIZE,
            "page_size",
            "must be a maximum of 100",
        );
        v.check(
            permitted_value(self.sort.as_str(), self.sort_safelist),
            "sort",
            "invalid sort value",
        );
    }

    /// Resolve the sort key against the safelist.
    ///
    /// Fails before any query text exists when the key is not listed.
    pub fn sort_field(&self) -> AppResult<SortField> {
        self.safelisted_sort()
            .map(SortField::from_safelist_entry)
            .ok_or_else(|| {
                AppError::failed_validation(vec![FieldError {
                    field: "sort".to_string(),
                    message: "invalid sort value".to_string(),
                }])
            })
    }

    /// Direction implied by the sort key, ascending when it is not listed.
    pub fn sort_direction(&self) -> SortDirection {
        self.safelisted_sort()
            .map(|entry| SortField::from_safelist_entry(entry).direction)
            .unwrap_or_default()
    }

    /// SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        (self.page - 1).max(0) * self.page_size
    }

    fn safelisted_sort(&self) -> Option<&'static str> {
        self.sort_safelist
            .iter()
            .copied()
            .find(|entry| *entry == self.sort)
    }
}
