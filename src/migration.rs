//! Embedded schema migrations (`migrations/` at the crate root).

use crate::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations. Already-applied ones are skipped.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(count = MIGRATOR.iter().count(), "migrations applied");
    Ok(())
}
