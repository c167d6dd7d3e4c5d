//! In-memory helmet store.
//!
//! Mirrors the PostgreSQL repository without a database: ids count up from
//! 1, text filters and text sort keys ignore case, ties break on id, and the
//! listing total is taken from the rows actually returned. Used by the
//! service and HTTP tests and by `database.backend = "memory"`.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use helmet_core::error::AppError;
use helmet_core::result::AppResult;
use helmet_core::types::{Filters, Metadata, SortDirection, SortField};
use helmet_entity::Helmet;

use crate::store::HelmetStore;

/// Helmet store holding records in a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryHelmetStore {
    rows: DashMap<i64, Helmet>,
    last_id: AtomicI64,
}

impl InMemoryHelmetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored helmets.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl HelmetStore for InMemoryHelmetStore {
    async fn insert(&self, helmet: &mut Helmet) -> AppResult<()> {
        let id = self.last_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        helmet.id = id;
        helmet.created_at = Utc::now();
        self.rows.insert(id, helmet.clone());
        debug!(helmet_id = id, "Inserted helmet");
        Ok(())
    }

    async fn get(&self, id: i64) -> AppResult<Helmet> {
        if id < 1 {
            return Err(AppError::not_found(format!("Helmet {id} not found")));
        }
        self.rows
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Helmet {id} not found")))
    }

    async fn update(&self, helmet: &Helmet) -> AppResult<()> {
        match self.rows.get_mut(&helmet.id) {
            Some(mut entry) => {
                let created_at = entry.created_at;
                *entry = Helmet {
                    created_at,
                    ..helmet.clone()
                };
                Ok(())
            }
            None => Err(AppError::edit_conflict(format!(
                "Helmet {} was modified or deleted concurrently",
                helmet.id
            ))),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if id < 1 || self.rows.remove(&id).is_none() {
            return Err(AppError::not_found(format!("Helmet {id} not found")));
        }
        Ok(())
    }

    async fn list(
        &self,
        name: &str,
        material: &str,
        protection: &str,
        filters: &Filters,
    ) -> AppResult<(Vec<Helmet>, Metadata)> {
        let sort = filters.sort_field()?;

        let mut matched: Vec<Helmet> = self
            .rows
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|h| {
                contains_ignore_case(&h.name, name)
                    && contains_ignore_case(&h.material, material)
                    && contains_ignore_case(&h.protection, protection)
            })
            .collect();

        matched.sort_by(|a, b| compare(a, b, sort).then(a.id.cmp(&b.id)));

        let matched_count = matched.len() as i64;
        let page: Vec<Helmet> = matched
            .into_iter()
            .skip(filters.offset().max(0) as usize)
            .take(filters.limit().max(0) as usize)
            .collect();

        // The total rides on the returned rows, so a page past the end has none.
        let total_records = if page.is_empty() { 0 } else { matched_count };

        let metadata = Metadata::calculate(total_records, filters.page, filters.page_size);
        Ok((page, metadata))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare(a: &Helmet, b: &Helmet, sort: SortField) -> Ordering {
    let ordering = match sort.column {
        "id" => a.id.cmp(&b.id),
        "name" => cmp_ignore_case(&a.name, &b.name),
        "year" => a.year.cmp(&b.year),
        "material" => cmp_ignore_case(&a.material, &b.material),
        "protection" => cmp_ignore_case(&a.protection, &b.protection),
        "weight" => a.weight.total_cmp(&b.weight),
        _ => Ordering::Equal,
    };

    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
