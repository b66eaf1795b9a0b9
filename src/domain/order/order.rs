//! Order entity and its single line item.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, OrderId, ProductId};

/// Number of units ordered. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Creates a quantity, rejecting zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("Quantity must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Signed stock delta that removes this quantity from inventory.
    pub fn as_decrement(&self) -> i64 {
        -i64::from(self.0)
    }

    /// Whether `stock` units are enough to cover this quantity.
    pub fn is_covered_by(&self, stock: i64) -> bool {
        stock >= i64::from(self.0)
    }
}

/// The product and quantity an order is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub item: OrderItem,
}

impl Order {
    /// Creates an order with a freshly generated id.
    pub fn place(item: OrderItem) -> Self {
        Self {
            id: OrderId::new(),
            item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorTag;

    #[test]
    fn quantity_rejects_zero() {
        assert_eq!(Quantity::new(0).unwrap_err().tag(), ErrorTag::ValidationError);
    }

    #[test]
    fn quantity_decrement_is_negative() {
        assert_eq!(Quantity::new(3).unwrap().as_decrement(), -3);
    }

    #[test]
    fn quantity_coverage_includes_exact_stock() {
        let qty = Quantity::new(7).unwrap();
        assert!(qty.is_covered_by(7));
        assert!(qty.is_covered_by(10));
        assert!(!qty.is_covered_by(6));
        assert!(!qty.is_covered_by(-1));
    }

    #[test]
    fn placed_orders_get_distinct_ids() {
        let item = OrderItem {
            product_id: ProductId::new("rye").unwrap(),
            quantity: Quantity::new(1).unwrap(),
        };
        let first = Order::place(item.clone());
        let second = Order::place(item);
        assert_ne!(first.id, second.id);
    }
}
