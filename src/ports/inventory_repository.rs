//! Inventory repository port.
//!
//! Stock is only ever changed through [`InventoryRepository::update_stock`]
//! with a signed delta. The port does not guard against negative stock;
//! callers validate before decrementing.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProductId};

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Current stock for a product. Unknown products have zero stock.
    ///
    /// # Errors
    ///
    /// - a domain error (typically `DatabaseError`) on I/O failure
    async fn get_stock(&self, product_id: &ProductId) -> Result<i64, DomainError>;

    /// Apply a signed delta to a product's stock.
    ///
    /// # Errors
    ///
    /// - a domain error (typically `DatabaseError`) on I/O failure
    async fn update_stock(&self, product_id: &ProductId, delta: i64) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn InventoryRepository) {}
    }
}
