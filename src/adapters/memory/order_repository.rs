//! In-memory implementation of OrderRepository.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, OrderId};
use crate::domain::order::Order;
use crate::ports::OrderRepository;

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every order saved so far, in save order.
    pub async fn orders(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save_order(&self, order: &Order) -> Result<OrderId, DomainError> {
        let mut orders = self.orders.lock().await;
        if orders.iter().any(|existing| existing.id == order.id) {
            return Err(DomainError::order(format!("Order {} already exists", order.id)));
        }
        orders.push(order.clone());
        Ok(order.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProductId;
    use crate::domain::order::{OrderItem, Quantity};

    fn order() -> Order {
        Order::place(OrderItem {
            product_id: ProductId::new("rye").unwrap(),
            quantity: Quantity::new(2).unwrap(),
        })
    }

    #[tokio::test]
    async fn saves_and_returns_id() {
        let repo = InMemoryOrderRepository::new();
        let order = order();

        let id = repo.save_order(&order).await.unwrap();

        assert_eq!(id, order.id);
        assert_eq!(repo.orders().await, vec![order]);
    }

    #[tokio::test]
    async fn orders_are_written_once() {
        let repo = InMemoryOrderRepository::new();
        let order = order();
        repo.save_order(&order).await.unwrap();

        let error = repo.save_order(&order).await.unwrap_err();

        assert_eq!(error.tag(), crate::domain::foundation::ErrorTag::OrderError);
    }
}
