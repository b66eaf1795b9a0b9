//! Success envelope returned by every use case.

use serde::Serialize;

use crate::domain::foundation::DomainError;

/// Outcome of a use case: a success envelope or a tagged domain error.
pub type ServiceResult<T> = Result<ServiceSuccess<T>, DomainError>;

/// Kind of success, which fixes the HTTP status of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuccessStatus {
    #[default]
    Ok,
    Created,
    Accepted,
    NoContent,
    PartialContent,
}

impl SuccessStatus {
    /// Numeric HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            SuccessStatus::Ok => 200,
            SuccessStatus::Created => 201,
            SuccessStatus::Accepted => 202,
            SuccessStatus::NoContent => 204,
            SuccessStatus::PartialContent => 206,
        }
    }
}

/// `{ status, message, data }` envelope.
///
/// `data` is always serialized; a query that found nothing carries `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSuccess<T> {
    pub status: SuccessStatus,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ServiceSuccess<T> {
    pub fn new(status: SuccessStatus, message: impl Into<String>, data: impl Into<Option<T>>) -> Self {
        Self {
            status,
            message: message.into(),
            data: data.into(),
        }
    }

    pub fn ok(message: impl Into<String>, data: impl Into<Option<T>>) -> Self {
        Self::new(SuccessStatus::Ok, message, data)
    }

    pub fn created(message: impl Into<String>, data: impl Into<Option<T>>) -> Self {
        Self::new(SuccessStatus::Created, message, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_status_serializes_screaming_case() {
        assert_eq!(serde_json::to_value(SuccessStatus::Ok).unwrap(), json!("OK"));
        assert_eq!(serde_json::to_value(SuccessStatus::NoContent).unwrap(), json!("NO_CONTENT"));
        assert_eq!(
            serde_json::to_value(SuccessStatus::PartialContent).unwrap(),
            json!("PARTIAL_CONTENT")
        );
    }

    #[test]
    fn success_status_codes() {
        assert_eq!(SuccessStatus::default().code(), 200);
        assert_eq!(SuccessStatus::Created.code(), 201);
        assert_eq!(SuccessStatus::Accepted.code(), 202);
        assert_eq!(SuccessStatus::NoContent.code(), 204);
        assert_eq!(SuccessStatus::PartialContent.code(), 206);
    }

    #[test]
    fn missing_data_serializes_as_null() {
        let envelope: ServiceSuccess<String> = ServiceSuccess::ok("Product found", None);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "status": "OK", "message": "Product found", "data": null })
        );
    }

    #[test]
    fn created_wraps_data() {
        let envelope: ServiceSuccess<u32> = ServiceSuccess::created("Order placed", 42);
        assert_eq!(envelope.status, SuccessStatus::Created);
        assert_eq!(envelope.data, Some(42));
    }
}
