//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the use cases and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `ProductRepository` - Read-only catalogue lookups
//! - `InventoryRepository` - Stock reads and signed stock deltas
//! - `OrderRepository` - Order persistence
//!
//! ## Operational Ports
//!
//! - `Logger` - Fire-and-forget log sink

mod inventory_repository;
mod logger;
mod order_repository;
mod product_repository;

pub use inventory_repository::InventoryRepository;
pub use logger::Logger;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
