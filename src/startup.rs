//! Process startup: wiring, serving, and shutdown.
//!
//! The database pool is a scoped resource. It is opened when the context is
//! built and closed when [`run`] returns, whether the server stopped cleanly,
//! failed to bind, or failed during wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::migrate::MigrateError;
use sqlx::PgPool;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::adapters::http::build_router;
use crate::adapters::logging::TracingLogger;
use crate::adapters::postgres;
use crate::application::context::{ContextError, DependencyContext, ResourceScope};
use crate::application::handlers::PlacementPolicy;
use crate::config::{AppConfig, ConfigError, ValidationError};
use crate::ports::Logger;

/// Reasons the process can fail to start or keep serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Dependency wiring failed: {0}")]
    Wiring(#[from] ContextError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] MigrateError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bindings that do not depend on external resources.
pub fn base_context(config: &AppConfig) -> DependencyContext {
    DependencyContext::new()
        .provide::<dyn Logger>(Arc::new(TracingLogger))
        .provide(Arc::new(PlacementPolicy::from(&config.orders)))
}

/// Connects to the database, builds the router, and serves until Ctrl-C.
///
/// # Errors
///
/// Any [`StartupError`]. Scoped resources are released before it is
/// returned.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let addr = config.server.socket_addr()?;

    ResourceScope::run(|scope| serve_in_scope(scope, config, addr)).await
}

async fn serve_in_scope(
    scope: ResourceScope,
    config: AppConfig,
    addr: SocketAddr,
) -> Result<(), StartupError> {
    let context = base_context(&config)
        .provide_scoped(
            &scope,
            async { postgres::connect(&config.database).await.map(Arc::new) },
            |pool: Arc<PgPool>| async move { pool.close().await },
        )
        .await?;

    if config.database.run_migrations {
        let pool = context.resolve::<PgPool>()?;
        postgres::run_migrations(&pool).await?;
    }

    let repositories = postgres::repositories(&context)?;
    let context = context.merge(repositories);
    tracing::debug!(capabilities = ?context.capabilities(), "Dependency context ready");

    let router = build_router(&context)?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Order desk listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "Could not listen for Ctrl-C; shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, OrderConfig, ServerConfig};

    fn config(validate_stock: bool) -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            orders: OrderConfig { validate_stock },
        }
    }

    #[test]
    fn base_context_binds_logger_and_policy() {
        let context = base_context(&config(false));

        assert!(context.contains::<dyn Logger>());
        assert_eq!(
            context.get::<PlacementPolicy>().map(|policy| *policy),
            Some(PlacementPolicy {
                validate_stock: false
            })
        );
    }

    #[test]
    fn base_context_alone_cannot_build_router() {
        let error = build_router(&base_context(&config(true))).err();
        assert!(matches!(error, Some(ContextError::Missing { .. })));
    }

    #[tokio::test]
    async fn invalid_bind_address_fails_before_connecting() {
        let mut config = config(true);
        config.server.host = "not a host".to_string();

        let error = run(config).await.unwrap_err();

        assert!(matches!(error, StartupError::InvalidConfig(_)));
    }
}
