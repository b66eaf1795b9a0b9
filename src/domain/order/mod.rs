//! Order domain module.
//!
//! An order is created once per successful placement and never changed
//! afterwards. Placement runs through the stages in [`PlacementStage`].

mod order;
mod placement;

pub use order::{Order, OrderItem, Quantity};
pub use placement::PlacementStage;
