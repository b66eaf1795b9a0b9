//! Product repository port (read side).
//!
//! The catalogue is read-only for this service, so the port only exposes
//! lookups. Absence is reported as `None`, never as an error.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProductId};
use crate::domain::product::Product;

/// Read access to catalogue products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by its public id. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Find a product by its unique name. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProductRepository) {}
    }
}
