//! Helmet CRUD and listing.

use std::sync::Arc;

use tracing::{debug, info};

use helmet_core::error::AppError;
use helmet_core::result::AppResult;
use helmet_core::types::filters::DEFAULT_PAGE_SIZE;
use helmet_core::types::{Filters, Metadata};
use helmet_core::validator::Validator;
use helmet_database::HelmetStore;
use helmet_entity::helmet::validate_helmet;
use helmet_entity::{Helmet, HelmetPatch, NewHelmet, SORT_SAFELIST};

/// Parameters for a helmet listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListHelmets {
    /// Substring the name must contain.
    pub name: String,
    /// Substring the material must contain.
    pub material: String,
    /// Substring the certification must contain.
    pub protection: String,
    /// Page number (1-based).
    pub page: i64,
    /// Items per page.
    pub page_size: i64,
    /// Sort key from [`SORT_SAFELIST`].
    pub sort: String,
}

impl Default for ListHelmets {
    fn default() -> Self {
        Self {
            name: String::new(),
            material: String::new(),
            protection: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: "id".to_string(),
        }
    }
}

/// Orchestrates validation and persistence for helmets.
#[derive(Clone)]
pub struct HelmetService {
    store: Arc<dyn HelmetStore>,
}

impl std::fmt::Debug for HelmetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelmetService").finish_non_exhaustive()
    }
}

impl HelmetService {
    /// Creates a new helmet service.
    pub fn new(store: Arc<dyn HelmetStore>) -> Self {
        Self { store }
    }

    /// Validates and stores a new helmet.
    pub async fn create(&self, input: NewHelmet) -> AppResult<Helmet> {
        let mut helmet = Helmet::from(input);
        ensure_valid(&helmet)?;

        self.store.insert(&mut helmet).await?;
        info!(helmet_id = helmet.id, name = %helmet.name, "Helmet created");
        Ok(helmet)
    }

    /// Fetches a helmet by id.
    pub async fn show(&self, id: i64) -> AppResult<Helmet> {
        self.store.get(id).await
    }

    /// Replaces every mutable field of an existing helmet.
    pub async fn replace(&self, id: i64, input: NewHelmet) -> AppResult<Helmet> {
        let mut helmet = self.store.get(id).await?;
        input.apply_to(&mut helmet);
        ensure_valid(&helmet)?;

        self.store.update(&helmet).await?;
        info!(helmet_id = id, "Helmet replaced");
        Ok(helmet)
    }

    /// Applies the present fields of `patch` to an existing helmet.
    pub async fn patch(&self, id: i64, patch: HelmetPatch) -> AppResult<Helmet> {
        let mut helmet = self.store.get(id).await?;
        if patch.is_empty() {
            debug!(helmet_id = id, "Empty patch; nothing to update");
            return Ok(helmet);
        }

        patch.apply_to(&mut helmet);
        ensure_valid(&helmet)?;

        self.store.update(&helmet).await?;
        info!(helmet_id = id, "Helmet updated");
        Ok(helmet)
    }

    /// Deletes a helmet.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await?;
        info!(helmet_id = id, "Helmet deleted");
        Ok(())
    }

    /// Lists helmets. Pagination and sort parameters are checked before the
    /// store is queried.
    pub async fn list(&self, params: ListHelmets) -> AppResult<(Vec<Helmet>, Metadata)> {
        let filters = Filters::new(params.page, params.page_size, params.sort, SORT_SAFELIST);

        let mut v = Validator::new();
        filters.validate(&mut v);
        if !v.is_valid() {
            return Err(AppError::failed_validation(v.into_errors()));
        }

        self.store
            .list(&params.name, &params.material, &params.protection, &filters)
            .await
    }
}

fn ensure_valid(helmet: &Helmet) -> AppResult<()> {
    let mut v = Validator::new();
    validate_helmet(&mut v, helmet);
    if v.is_valid() {
        Ok(())
    } else {
        debug!(errors = v.errors().len(), "Helmet failed validation");
        Err(AppError::failed_validation(v.into_errors()))
    }
}
