//! Controller middleware.
//!
//! Middlewares run inside the controller pipeline, after the raw request is
//! read and before the use case input is extracted. Each one either lets the
//! request through or answers it directly:
//!
//! ```text
//! RawRequest → m1 → m2 → ... → extract → use case
//!               └─ Flow::Respond(response) short-circuits
//! ```
//!
//! - `AssignRequestId` - Stores `locals.requestId`
//! - `RequireJsonBody` - Rejects requests whose body is not a JSON object

mod json_body;
mod request_id;

use async_trait::async_trait;
use axum::response::Response;

use super::extract::RawRequest;

pub use json_body::RequireJsonBody;
pub use request_id::{AssignRequestId, REQUEST_ID_HEADER, REQUEST_ID_LOCAL};

/// What a middleware decided about a request.
#[derive(Debug)]
pub enum Flow {
    /// Continue with the next middleware or the use case.
    Next,
    /// Answer with this response; nothing further runs.
    Respond(Response),
}

#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, request: &mut RawRequest) -> Flow;
}
