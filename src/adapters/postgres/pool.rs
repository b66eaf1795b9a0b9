//! Connection pool setup.

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Opens a pool sized and timed from `config`.
///
/// # Errors
///
/// Returns the `sqlx` error if the first connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(url = %config.redacted_url(), "Connecting to PostgreSQL");

    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "PostgreSQL connected");
    Ok(pool)
}

/// Applies the embedded migrations under `migrations/`.
///
/// # Errors
///
/// Returns the migration error unchanged.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
