//! In-memory implementation of InventoryRepository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::InventoryRepository;

/// Stock per product. Products never seen have zero stock.
#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    stock: Mutex<HashMap<ProductId, i64>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(stock: impl IntoIterator<Item = (ProductId, i64)>) -> Self {
        Self {
            stock: Mutex::new(stock.into_iter().collect()),
        }
    }

    /// Current stock, for assertions.
    pub async fn stock_of(&self, product_id: &ProductId) -> i64 {
        self.stock.lock().await.get(product_id).copied().unwrap_or(0)
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn get_stock(&self, product_id: &ProductId) -> Result<i64, DomainError> {
        Ok(self.stock_of(product_id).await)
    }

    async fn update_stock(&self, product_id: &ProductId, delta: i64) -> Result<(), DomainError> {
        *self.stock.lock().await.entry(product_id.clone()).or_insert(0) += delta;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn applies_signed_deltas() {
        let rye = ProductId::new("rye").unwrap();
        let repo = InMemoryInventoryRepository::with_stock([(rye.clone(), 5)]);

        repo.update_stock(&rye, -2).await.unwrap();
        repo.update_stock(&rye, 10).await.unwrap();

        assert_eq!(repo.get_stock(&rye).await.unwrap(), 13);
    }

    #[tokio::test]
    async fn unknown_product_starts_at_zero() {
        let repo = InMemoryInventoryRepository::new();
        let spelt = ProductId::new("spelt").unwrap();

        assert_eq!(repo.get_stock(&spelt).await.unwrap(), 0);
        repo.update_stock(&spelt, 4).await.unwrap();
        assert_eq!(repo.stock_of(&spelt).await, 4);
    }
}
