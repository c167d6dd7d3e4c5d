//! The helmet store abstraction.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use helmet_core::error::AppError;
use helmet_core::result::AppResult;
use helmet_core::types::{Filters, Metadata};
use helmet_entity::Helmet;

/// Persistence operations for helmets.
///
/// Implementations classify failures at this boundary: a missing record is
/// [`ErrorKind::NotFound`](helmet_core::error::ErrorKind::NotFound), an
/// update that matched no row is
/// [`ErrorKind::EditConflict`](helmet_core::error::ErrorKind::EditConflict),
/// and anything else is a generic database error.
#[async_trait]
pub trait HelmetStore: Send + Sync + 'static {
    /// Persist a new helmet and write the assigned id and creation
    /// timestamp back into it.
    async fn insert(&self, helmet: &mut Helmet) -> AppResult<()>;

    /// Fetch a helmet by id.
    async fn get(&self, id: i64) -> AppResult<Helmet>;

    /// Overwrite the mutable fields of the helmet with `helmet.id`.
    ///
    /// Only detects a record deleted since it was read; two concurrent
    /// updates both succeed.
    async fn update(&self, helmet: &Helmet) -> AppResult<()>;

    /// Remove a helmet by id.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// List helmets whose name, material and protection contain the given
    /// substrings (case-insensitive, empty matches all), sorted and paged
    /// by `filters`.
    async fn list(
        &self,
        name: &str,
        material: &str,
        protection: &str,
        filters: &Filters,
    ) -> AppResult<(Vec<Helmet>, Metadata)>;
}

/// Bound a store operation by `limit`. Elapsing is reported as a plain
/// database error.
pub(crate) async fn with_timeout<T, F>(limit: Duration, operation: &str, fut: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                operation,
                timeout_ms = limit.as_millis() as u64,
                "Store operation timed out"
            );
            Err(AppError::database(format!(
                "Failed to {operation} helmet: timed out"
            )))
        }
    }
}
