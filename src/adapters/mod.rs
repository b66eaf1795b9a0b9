//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum surface and the generic controller
//! - `postgres` - `sqlx` repositories
//! - `memory` - In-memory repositories for tests and demos
//! - `logging` - `Logger` port over `tracing`

pub mod http;
pub mod logging;
pub mod memory;
pub mod postgres;

pub use logging::TracingLogger;
