//! Domain layer containing business types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, error taxonomy)
//! - `product` - Read-only catalogue products
//! - `order` - Orders and the placement state machine

pub mod foundation;
pub mod order;
pub mod product;
