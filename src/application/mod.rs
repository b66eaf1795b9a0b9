//! Application layer - Use cases, their dependencies, and their outcomes.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are resolved from a [`DependencyContext`] and return a
//! [`ServiceResult`].

pub mod context;
pub mod handlers;
pub mod response;
pub mod use_case;

pub use context::{ContextError, DependencyContext, FromContext, ResourceScope};
pub use handlers::{
    GetProductByIdHandler, GetProductByNameHandler, ListProductsHandler, PlaceOrderHandler,
    PlacementPolicy,
};
pub use response::{ServiceResult, ServiceSuccess, SuccessStatus};
pub use use_case::UseCase;
