//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresProductRepository` - Catalogue lookups
//! - `PostgresInventoryRepository` - Stock reads and signed deltas
//! - `PostgresOrderRepository` - Order inserts
//!
//! All three resolve the shared `PgPool` capability from the context.

mod inventory_repository;
mod order_repository;
mod pool;
mod product_repository;

use std::sync::Arc;

pub use inventory_repository::PostgresInventoryRepository;
pub use order_repository::PostgresOrderRepository;
pub use pool::{connect, run_migrations};
pub use product_repository::PostgresProductRepository;

use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::ports::{InventoryRepository, OrderRepository, ProductRepository};

/// Binds the PostgreSQL repositories to their ports.
///
/// `context` must already provide a `PgPool`.
///
/// # Errors
///
/// - `ContextError::Missing` if no `PgPool` is bound
pub fn repositories(context: &DependencyContext) -> Result<DependencyContext, ContextError> {
    Ok(DependencyContext::new()
        .provide::<dyn ProductRepository>(Arc::new(PostgresProductRepository::from_context(
            context,
        )?))
        .provide::<dyn InventoryRepository>(Arc::new(
            PostgresInventoryRepository::from_context(context)?,
        ))
        .provide::<dyn OrderRepository>(Arc::new(PostgresOrderRepository::from_context(
            context,
        )?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repositories_require_a_pool() {
        match repositories(&DependencyContext::new()) {
            Err(ContextError::Missing { capability }) => assert!(capability.contains("PgPool")),
            Ok(_) => panic!("repositories resolved without a pool"),
        }
    }
}
