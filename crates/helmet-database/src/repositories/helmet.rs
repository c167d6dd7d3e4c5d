//! PostgreSQL helmet repository.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};
use tracing::debug;

use helmet_core::error::{AppError, ErrorKind};
use helmet_core::result::AppResult;
use helmet_core::types::{Filters, Metadata, SortField};
use helmet_entity::Helmet;

use crate::store::{HelmetStore, with_timeout};

const HELMET_COLUMNS: &str = "id, created_at, name, year, material, ventilation, protection, \
     weight, sun_protection, design, lining_material, fastening";

/// Helmet store backed by the `mhelmets` table.
#[derive(Debug, Clone)]
pub struct PgHelmetRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgHelmetRepository {
    /// Create a new helmet repository.
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl HelmetStore for PgHelmetRepository {
    async fn insert(&self, helmet: &mut Helmet) -> AppResult<()> {
        let (id, created_at) = with_timeout(self.query_timeout, "insert", async {
            sqlx::query_as::<_, (i64, DateTime<Utc>)>(
                "INSERT INTO mhelmets (name, year, material, ventilation, protection, weight, \
                 sun_protection, design, lining_material, fastening) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
                 RETURNING id, created_at",
            )
            .bind(&helmet.name)
            .bind(helmet.year)
            .bind(&helmet.material)
            .bind(helmet.ventilation)
            .bind(&helmet.protection)
            .bind(helmet.weight)
            .bind(helmet.sun_protection)
            .bind(&helmet.design)
            .bind(&helmet.lining_material)
            .bind(&helmet.fastening)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert helmet", e))
        })
        .await?;

        helmet.id = id;
        helmet.created_at = created_at;
        debug!(helmet_id = id, "Inserted helmet");
        Ok(())
    }

    async fn get(&self, id: i64) -> AppResult<Helmet> {
        if id < 1 {
            return Err(AppError::not_found(format!("Helmet {id} not found")));
        }

        let query = format!("SELECT {HELMET_COLUMNS} FROM mhelmets WHERE id = $1");
        with_timeout(self.query_timeout, "get", async {
            sqlx::query_as::<_, Helmet>(&query)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get helmet", e))?
                .ok_or_else(|| AppError::not_found(format!("Helmet {id} not found")))
        })
        .await
    }

    async fn update(&self, helmet: &Helmet) -> AppResult<()> {
        let updated = with_timeout(self.query_timeout, "update", async {
            sqlx::query_scalar::<_, i64>(
                "UPDATE mhelmets SET name = $1, year = $2, material = $3, ventilation = $4, \
                 protection = $5, weight = $6, sun_protection = $7, design = $8, \
                 lining_material = $9, fastening = $10 \
                 WHERE id = $11 RETURNING id",
            )
            .bind(&helmet.name)
            .bind(helmet.year)
            .bind(&helmet.material)
            .bind(helmet.ventilation)
            .bind(&helmet.protection)
            .bind(helmet.weight)
            .bind(helmet.sun_protection)
            .bind(&helmet.design)
            .bind(&helmet.lining_material)
            .bind(&helmet.fastening)
            .bind(helmet.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update helmet", e))
        })
        .await?;

        match updated {
            Some(_) => Ok(()),
            None => Err(AppError::edit_conflict(format!(
                "Helmet {} was modified or deleted concurrently",
                helmet.id
            ))),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if id < 1 {
            return Err(AppError::not_found(format!("Helmet {id} not found")));
        }

        let result = with_timeout(self.query_timeout, "delete", async {
            sqlx::query("DELETE FROM mhelmets WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete helmet", e)
                })
        })
        .await?;

        if result.rows_affected() == 0 {
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
        let query = build_list_query(sort);

        let rows: Vec<PgRow> = with_timeout(self.query_timeout, "list", async {
            sqlx::query(&query)
                .bind(name)
                .bind(material)
                .bind(protection)
                .bind(filters.limit())
                .bind(filters.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list helmets", e))
        })
        .await?;

        let mut total_records = 0_i64;
        let mut helmets = Vec::with_capacity(rows.len());
        for row in &rows {
            total_records = row.try_get("total_records").map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read helmet count", e)
            })?;
            helmets.push(Helmet::from_row(row).map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to decode helmet", e)
            })?);
        }

        let metadata = Metadata::calculate(total_records, filters.page, filters.page_size);
        debug!(
            returned = helmets.len(),
            total_records, "Listed helmets"
        );
        Ok((helmets, metadata))
    }
}

/// Build the listing query. The sort column comes from the safelist, so
/// interpolating it is safe; every client value is a bind parameter.
fn build_list_query(sort: SortField) -> String {
    format!(
        "SELECT count(*) OVER() AS total_records, {HELMET_COLUMNS} \
         FROM mhelmets \
         WHERE (STRPOS(LOWER(name), LOWER($1)) > 0 OR $1 = '') \
         AND (STRPOS(LOWER(material), LOWER($2)) > 0 OR $2 = '') \
         AND (STRPOS(LOWER(protection), LOWER($3)) > 0 OR $3 = '') \
         ORDER BY {} {}, id ASC \
         LIMIT $4 OFFSET $5",
        sort_key(sort.column),
        sort.direction.as_sql()
    )
}

/// Text columns order case-insensitively, matching the `LOWER()` indexes.
fn sort_key(column: &str) -> String {
    match column {
        "name" | "material" | "protection" => format!("LOWER({column})"),
        other => other.to_string(),
    }
}
