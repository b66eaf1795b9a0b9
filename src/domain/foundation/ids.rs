//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::DomainError;

/// Public identifier of a product.
///
/// Product ids are assigned by the catalogue, so they are opaque strings
/// rather than UUIDs. They are never blank, including when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Creates a ProductId, rejecting blank input.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("Product id cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Unique identifier for a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random OrderId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorTag;

    #[test]
    fn product_id_rejects_blank() {
        let err = ProductId::new("   ").unwrap_err();
        assert_eq!(err.tag(), ErrorTag::ValidationError);
    }

    #[test]
    fn product_id_keeps_value_verbatim() {
        let id: ProductId = "croissant-01".parse().unwrap();
        assert_eq!(id.as_str(), "croissant-01");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"croissant-01\"");
    }

    #[test]
    fn product_id_deserialization_rejects_blank() {
        let err = serde_json::from_str::<ProductId>("\"  \"").unwrap_err();
        assert!(err.to_string().contains("Product id cannot be empty"));

        let id: ProductId = serde_json::from_str("\"rye\"").unwrap();
        assert_eq!(id.as_str(), "rye");
    }

    #[test]
    fn order_ids_are_unique() {
        assert_ne!(OrderId::new(), OrderId::new());
    }

    #[test]
    fn order_id_roundtrips_through_string() {
        let id = OrderId::new();
        let parsed: OrderId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
