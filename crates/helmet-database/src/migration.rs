//! Schema migrations for the `mhelmets` table.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use helmet_core::error::{AppError, ErrorKind};

/// Embedded migrations from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or_default();
    info!(
        embedded = MIGRATOR.iter().count(),
        latest_version = latest,
        "Applying mhelmets migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to migrate mhelmets schema: {e}"),
            e,
        )
    })?;

    info!(version = latest, "mhelmets schema is current");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_both_schema_steps() {
        let descriptions: Vec<_> = MIGRATOR.iter().map(|m| m.description.to_string()).collect();
        assert_eq!(descriptions.len(), 2);
        assert!(descriptions[0].contains("create mhelmets"));
        assert!(descriptions[1].contains("revision fields"));
    }
}
