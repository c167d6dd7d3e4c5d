//! Listing query parameter extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use helmet_core::error::AppError;
use helmet_core::types::filters::DEFAULT_PAGE_SIZE;
use helmet_core::validator::Validator;
use helmet_service::ListHelmets;

use crate::error::ApiError;

/// Raw query string for `GET /v1/mhelmets`.
///
/// `page` and `page_size` stay strings here so a non-integer value becomes a
/// field error instead of a generic query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Substring of the helmet name.
    #[serde(default)]
    pub name: String,
    /// Substring of the shell material.
    #[serde(default)]
    pub material: String,
    /// Substring of the certification.
    #[serde(default)]
    pub protection: String,
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default: 20).
    pub page_size: Option<String>,
    /// Sort key (default: `id`).
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_sort() -> String {
    "id".to_string()
}

impl ListQuery {
    /// Converts to service parameters, checking the integer fields.
    pub fn into_list_helmets(self) -> Result<ListHelmets, AppError> {
        let mut v = Validator::new();
        let page = read_int(self.page.as_deref(), "page", 1, &mut v);
        let page_size = read_int(
            self.page_size.as_deref(),
            "page_size",
            DEFAULT_PAGE_SIZE,
            &mut v,
        );

        if !v.is_valid() {
            return Err(AppError::failed_validation(v.into_errors()));
        }

        Ok(ListHelmets {
            name: self.name,
            material: self.material,
            protection: self.protection,
            page,
            page_size,
            sort: if self.sort.is_empty() {
                default_sort()
            } else {
                self.sort
            },
        })
    }
}

fn read_int(raw: Option<&str>, key: &str, default: i64, v: &mut Validator) -> i64 {
    match raw {
        Some(value) if !value.is_empty() => value.parse().unwrap_or_else(|_| {
            v.add_error(key, "must be an integer value");
            default
        }),
        _ => default,
    }
}

/// Validated listing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams(pub ListHelmets);

impl<S: Send + Sync> FromRequestParts<S> for ListParams {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError(AppError::bad_request(e.body_text())))?;

        query.into_list_helmets().map(Self).map_err(ApiError)
    }
}
