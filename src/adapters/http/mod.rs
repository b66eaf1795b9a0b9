//! HTTP adapter - axum surface over the use cases.
//!
//! - `extract` - Reads request sections into a use case record
//! - `middleware` - Pre-use-case hooks that may answer a request directly
//! - `controller` - Generic use case to handler adapter
//! - `response` - Outcome to status code and JSON body
//! - `routes` - The application router

pub mod controller;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;

pub use controller::Controller;
pub use extract::{extract, ExtractedRequest, Locals, RawRequest, RequestField};
pub use middleware::{AssignRequestId, Flow, Middleware, RequireJsonBody};
pub use response::{unexpected_error_response, ErrorEnvelope, UNEXPECTED_ERROR_MESSAGE};
pub use routes::build_router;
