//! Connection pool setup and direct store operations that have no HTTP route.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open the pool described by `settings`, creating the database file if missing.
/// Foreign keys are enforced on every connection so cascades fire.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Each in-memory connection is its own database: pin exactly one and never recycle it.
    let pool_options = if settings.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(settings.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!(url = %settings.database_url, "database pool ready");
    Ok(pool)
}

/// Remove every row from all tables, children first.
pub async fn clear_all(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for table in ["hero_powers", "heroes", "powers"] {
        let sql = format!("DELETE FROM {}", table);
        tracing::debug!(sql = %sql, "query");
        sqlx::query(&sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}
