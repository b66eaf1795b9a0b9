//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each one
//! is also a [`UseCase`](super::UseCase) so it can be served over HTTP.

pub mod order;
pub mod product;

pub use order::{
    PlaceOrderBody, PlaceOrderCommand, PlaceOrderHandler, PlaceOrderRequest, PlaceOrderResult,
    PlacementPolicy,
};
pub use product::{
    GetProductByIdHandler, GetProductByIdQuery, GetProductByIdRequest, GetProductByNameHandler,
    GetProductByNameQuery, GetProductByNameRequest, ListProductsHandler, ListProductsRequest,
    ProductIdParams, ProductNameParams,
};
