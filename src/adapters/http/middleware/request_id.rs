//! Request id assignment.

use async_trait::async_trait;
use uuid::Uuid;

use super::{Flow, Middleware};
use crate::adapters::http::extract::RawRequest;

/// Header a client may use to supply its own request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Key the request id is stored under in `locals`.
pub const REQUEST_ID_LOCAL: &str = "requestId";

/// Stores the request id in `locals.requestId`.
///
/// Uses the `x-request-id` header when present and non-blank, otherwise a
/// fresh UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignRequestId;

#[async_trait]
impl Middleware for AssignRequestId {
    async fn handle(&self, request: &mut RawRequest) -> Flow {
        let request_id = request
            .headers
            .get(REQUEST_ID_HEADER)
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        request.locals.insert(REQUEST_ID_LOCAL, request_id);
        Flow::Next
    }
}
