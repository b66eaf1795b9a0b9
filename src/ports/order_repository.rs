//! Order repository port (write side).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderId};
use crate::domain::order::Order;

/// Persists placed orders. Orders are written once and never updated.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Save a new order and return its id.
    ///
    /// # Errors
    ///
    /// - `OrderError` on persistence failure
    async fn save_order(&self, order: &Order) -> Result<OrderId, DomainError>;
}
