//! Application configuration module
//!
//! Configuration is read from environment variables (and a `.env` file in
//! development) using the `config` and `dotenvy` crates. Variables use the
//! `ORDER_DESK` prefix and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use order_desk::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod database;
mod error;
mod orders;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use orders::OrderConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ORDER_DESK";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Order placement configuration
    #[serde(default)]
    pub orders: OrderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `ORDER_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `ORDER_DESK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ORDER_DESK__DATABASE__URL=...` -> `database.url = ...`
    /// - `ORDER_DESK__ORDERS__VALIDATE_STOCK=false` -> `orders.validate_stock = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }
}
