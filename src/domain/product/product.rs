//! Product entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, Timestamp};

/// A catalogue product as stored by the persistence layer.
///
/// `internal_id` and the audit timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub internal_id: i64,
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Builds a product stamped with the current time.
    pub fn new(internal_id: i64, id: ProductId, name: impl Into<String>, price: f64) -> Self {
        let now = Timestamp::now();
        Self {
            internal_id,
            id,
            name: name.into(),
            price,
            created_at: now,
            updated_at: now,
        }
    }
}
