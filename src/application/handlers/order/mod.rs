//! Order command handlers.

mod place_order;

pub use place_order::{
    PlaceOrderBody, PlaceOrderCommand, PlaceOrderHandler, PlaceOrderRequest, PlaceOrderResult,
    PlacementPolicy, RequestLocals,
};
