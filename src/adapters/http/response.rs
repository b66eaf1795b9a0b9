//! Outcome to HTTP translation.
//!
//! This is the only place a [`DomainError`] or [`ServiceSuccess`] becomes a
//! status code and JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::response::{ServiceSuccess, SuccessStatus};
use crate::domain::foundation::{DomainError, ErrorTag, HttpErrorStatus};

/// Body returned for failures that are not domain errors.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Wire shape of a domain error. The cause is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub status: HttpErrorStatus,
    pub message: String,
    pub error: ErrorTag,
}

impl From<&DomainError> for ErrorEnvelope {
    fn from(error: &DomainError) -> Self {
        Self {
            status: error.status(),
            message: error.message().to_string(),
            error: error.tag(),
        }
    }
}

/// Wire shape of an unclassified fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaultEnvelope {
    pub status: HttpErrorStatus,
    pub message: &'static str,
}

fn error_status_code(status: HttpErrorStatus) -> StatusCode {
    match status {
        HttpErrorStatus::BadRequest => StatusCode::BAD_REQUEST,
        HttpErrorStatus::Unauthorized => StatusCode::UNAUTHORIZED,
        HttpErrorStatus::Forbidden => StatusCode::FORBIDDEN,
        HttpErrorStatus::NotFound => StatusCode::NOT_FOUND,
        HttpErrorStatus::Conflict => StatusCode::CONFLICT,
        HttpErrorStatus::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn success_status_code(status: SuccessStatus) -> StatusCode {
    match status {
        SuccessStatus::Ok => StatusCode::OK,
        SuccessStatus::Created => StatusCode::CREATED,
        SuccessStatus::Accepted => StatusCode::ACCEPTED,
        SuccessStatus::NoContent => StatusCode::NO_CONTENT,
        SuccessStatus::PartialContent => StatusCode::PARTIAL_CONTENT,
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (
            error_status_code(self.status()),
            Json(ErrorEnvelope::from(&self)),
        )
            .into_response()
    }
}

impl<T: Serialize> IntoResponse for ServiceSuccess<T> {
    fn into_response(self) -> Response {
        (success_status_code(self.status), Json(self)).into_response()
    }
}

/// 500 response for a fault that is not a domain error.
pub fn unexpected_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FaultEnvelope {
            status: HttpErrorStatus::InternalServerError,
            message: UNEXPECTED_ERROR_MESSAGE,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn error_codes_agree_with_taxonomy() {
        for tag in ErrorTag::ALL {
            assert_eq!(error_status_code(tag.status()).as_u16(), tag.status().code());
        }
    }

    #[test]
    fn success_codes_agree_with_success_kind() {
        for status in [
            SuccessStatus::Ok,
            SuccessStatus::Created,
            SuccessStatus::Accepted,
            SuccessStatus::NoContent,
            SuccessStatus::PartialContent,
        ] {
            assert_eq!(success_status_code(status).as_u16(), status.code());
        }
    }

    #[tokio::test]
    async fn inventory_error_renders_bad_request_envelope() {
        let error = DomainError::inventory("Insufficient stock for rye")
            .with_cause(std::io::Error::other("secret detail"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "status": "BAD_REQUEST",
                "message": "Insufficient stock for rye",
                "error": "InventoryError",
            })
        );
    }

    #[tokio::test]
    async fn success_renders_status_and_null_data() {
        let envelope: ServiceSuccess<String> = ServiceSuccess::ok("Product found", None);

        let response = envelope.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "OK", "message": "Product found", "data": null })
        );
    }

    #[tokio::test]
    async fn unexpected_error_hides_detail() {
        let response = unexpected_error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "INTERNAL_SERVER_ERROR", "message": "An unexpected error occurred" })
        );
    }
}
