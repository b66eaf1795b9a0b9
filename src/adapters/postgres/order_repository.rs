//! PostgreSQL implementation of OrderRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::domain::foundation::{DomainError, OrderId};
use crate::domain::order::Order;
use crate::ports::OrderRepository;

#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FromContext for PostgresOrderRepository {
    fn from_context(context: &DependencyContext) -> Result<Self, ContextError> {
        Ok(Self::new(PgPool::clone(&*context.resolve::<PgPool>()?)))
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn save_order(&self, order: &Order) -> Result<OrderId, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO orders (id, product_id, quantity)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.item.product_id.as_str())
        .bind(i64::from(order.item.quantity.value()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::order("Error when saving order").with_cause(e))?;

        Ok(order.id)
    }
}
