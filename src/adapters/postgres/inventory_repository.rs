//! PostgreSQL implementation of InventoryRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::InventoryRepository;

#[derive(Clone)]
pub struct PostgresInventoryRepository {
    pool: PgPool,
}

impl PostgresInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FromContext for PostgresInventoryRepository {
    fn from_context(context: &DependencyContext) -> Result<Self, ContextError> {
        Ok(Self::new(PgPool::clone(&*context.resolve::<PgPool>()?)))
    }
}

#[async_trait]
impl InventoryRepository for PostgresInventoryRepository {
    async fn get_stock(&self, product_id: &ProductId) -> Result<i64, DomainError> {
        let stock: Option<(i64,)> =
            sqlx::query_as("SELECT stock FROM inventory WHERE product_id = $1")
                .bind(product_id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Error when reading stock").with_cause(e))?;

        Ok(stock.map(|(stock,)| stock).unwrap_or(0))
    }

    async fn update_stock(&self, product_id: &ProductId, delta: i64) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO inventory (product_id, stock, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (product_id) DO UPDATE SET
                stock = inventory.stock + EXCLUDED.stock,
                updated_at = now()
            "#,
        )
        .bind(product_id.as_str())
        .bind(delta)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Error when updating stock").with_cause(e))?;

        Ok(())
    }
}
