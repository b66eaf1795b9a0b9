//! JSON object body guard.

use async_trait::async_trait;
use axum::response::IntoResponse;

use super::{Flow, Middleware};
use crate::adapters::http::extract::RawRequest;
use crate::domain::foundation::DomainError;

/// Answers with a `ValidationError` unless the body is a JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireJsonBody;

#[async_trait]
impl Middleware for RequireJsonBody {
    async fn handle(&self, request: &mut RawRequest) -> Flow {
        if request.body.is_object() {
            Flow::Next
        } else {
            tracing::debug!("Rejected request without a JSON object body");
            Flow::Respond(
                DomainError::validation("Request body must be a JSON object").into_response(),
            )
        }
    }
}
