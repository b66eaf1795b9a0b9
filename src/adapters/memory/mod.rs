//! In-memory adapters.
//!
//! Used by tests and local demos. State lives behind tokio locks and is lost
//! when the process exits.

mod inventory_repository;
mod order_repository;
mod product_repository;

pub use inventory_repository::InMemoryInventoryRepository;
pub use order_repository::InMemoryOrderRepository;
pub use product_repository::InMemoryProductRepository;
