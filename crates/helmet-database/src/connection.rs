//! PostgreSQL setup for the helmet store.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use helmet_core::config::DatabaseConfig;
use helmet_core::error::{AppError, ErrorKind};
use helmet_core::result::AppResult;

use crate::migration::run_migrations;
use crate::repositories::PgHelmetRepository;
use crate::store::with_timeout;

/// A migrated connection pool ready to serve helmet queries.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
    query_timeout: Duration,
}

impl DatabasePool {
    /// Connect, bring the `mhelmets` schema up to date and check that the
    /// table answers within the query timeout.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        info!(
            url = %redact_credentials(&config.url),
            max_connections = config.max_connections,
            query_timeout_seconds = config.query_timeout_seconds,
            "Opening helmet database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to open helmet database", e)
            })?;

        let db = Self {
            pool,
            query_timeout: Duration::from_secs(config.query_timeout_seconds),
        };

        run_migrations(&db.pool).await?;
        db.health_check().await?;
        Ok(db)
    }

    /// Repository over this pool using the configured query timeout.
    pub fn helmet_repository(&self) -> PgHelmetRepository {
        PgHelmetRepository::new(self.pool.clone(), self.query_timeout)
    }

    /// Run a bounded read against `mhelmets`.
    pub async fn health_check(&self) -> AppResult<()> {
        let rows: i64 = with_timeout(self.query_timeout, "count", async {
            sqlx::query_scalar::<_, i64>("SELECT count(*) FROM mhelmets")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "mhelmets is not readable", e)
                })
        })
        .await?;

        info!(helmets = rows, "Helmet database ready");
        Ok(())
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Helmet database closed");
    }
}

/// Replace the userinfo part of a connection URL with `***`.
fn redact_credentials(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.rsplit_once('@') {
        Some((_, host)) => format!("{scheme}://***@{host}"),
        None => url.to_string(),
    }
}
