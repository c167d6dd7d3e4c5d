//! Sorting types for list queries.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A resolved sort specification.
///
/// The column is always borrowed from a static safelist, so it can be
/// interpolated into an `ORDER BY` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortField {
    /// Column to sort by.
    pub column: &'static str,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortField {
    /// Parse a safelist entry; a leading `-` selects descending order.
    pub fn from_safelist_entry(entry: &'static str) -> Self {
        match entry.strip_prefix('-') {
            Some(column) => Self {
                column,
                direction: SortDirection::Desc,
            },
            None => Self {
                column: entry,
                direction: SortDirection::Asc,
            },
        }
    }
}
