//! In-memory implementation of ProductRepository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProductId};
use crate::domain::product::Product;
use crate::ports::ProductRepository;

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    pub async fn insert(&self, product: Product) {
        self.products.write().await.push(product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|product| &product.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|product| product.name == name)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_inserted_product_by_id_and_name() {
        let repo = InMemoryProductRepository::new();
        repo.insert(Product::new(1, ProductId::new("rye").unwrap(), "Rye", 3.0))
            .await;

        let id = ProductId::new("rye").unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_some());
        assert!(repo.find_by_name("Rye").await.unwrap().is_some());
        assert!(repo.find_by_name("rye").await.unwrap().is_none());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
