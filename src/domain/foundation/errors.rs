//! Error taxonomy for the domain layer.
//!
//! Every failure a use case can report is a [`DomainError`]. Its [`ErrorTag`]
//! is drawn from a closed set and fixes the HTTP status class the failure is
//! reported with. The mapping is a pure function of the tag.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Opaque underlying cause attached to a domain error.
pub type ErrorCause = Arc<dyn Error + Send + Sync + 'static>;

/// Discriminant of a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorTag {
    ValidationError,
    BadRequestError,
    UnauthorizedError,
    ForbiddenError,
    NotFoundError,
    ConflictError,
    /// Insufficient stock; the client can correct it by ordering less.
    InventoryError,
    /// Unexpected failure while persisting an order.
    OrderError,
    DatabaseError,
}

impl ErrorTag {
    /// All tags, in declaration order.
    pub const ALL: [ErrorTag; 9] = [
        ErrorTag::ValidationError,
        ErrorTag::BadRequestError,
        ErrorTag::UnauthorizedError,
        ErrorTag::ForbiddenError,
        ErrorTag::NotFoundError,
        ErrorTag::ConflictError,
        ErrorTag::InventoryError,
        ErrorTag::OrderError,
        ErrorTag::DatabaseError,
    ];

    /// HTTP status class for this tag.
    pub const fn status(self) -> HttpErrorStatus {
        match self {
            ErrorTag::ValidationError | ErrorTag::BadRequestError | ErrorTag::InventoryError => {
                HttpErrorStatus::BadRequest
            }
            ErrorTag::UnauthorizedError => HttpErrorStatus::Unauthorized,
            ErrorTag::ForbiddenError => HttpErrorStatus::Forbidden,
            ErrorTag::NotFoundError => HttpErrorStatus::NotFound,
            ErrorTag::ConflictError => HttpErrorStatus::Conflict,
            ErrorTag::OrderError | ErrorTag::DatabaseError => HttpErrorStatus::InternalServerError,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorTag::ValidationError => "ValidationError",
            ErrorTag::BadRequestError => "BadRequestError",
            ErrorTag::UnauthorizedError => "UnauthorizedError",
            ErrorTag::ForbiddenError => "ForbiddenError",
            ErrorTag::NotFoundError => "NotFoundError",
            ErrorTag::ConflictError => "ConflictError",
            ErrorTag::InventoryError => "InventoryError",
            ErrorTag::OrderError => "OrderError",
            ErrorTag::DatabaseError => "DatabaseError",
        }
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP status classes a domain error can be reported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpErrorStatus {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    InternalServerError,
}

impl HttpErrorStatus {
    /// Numeric HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            HttpErrorStatus::BadRequest => 400,
            HttpErrorStatus::Unauthorized => 401,
            HttpErrorStatus::Forbidden => 403,
            HttpErrorStatus::NotFound => 404,
            HttpErrorStatus::Conflict => 409,
            HttpErrorStatus::InternalServerError => 500,
        }
    }

    pub const fn is_server_error(self) -> bool {
        self.code() >= 500
    }
}

impl fmt::Display for HttpErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpErrorStatus::BadRequest => "BAD_REQUEST",
            HttpErrorStatus::Unauthorized => "UNAUTHORIZED",
            HttpErrorStatus::Forbidden => "FORBIDDEN",
            HttpErrorStatus::NotFound => "NOT_FOUND",
            HttpErrorStatus::Conflict => "CONFLICT",
            HttpErrorStatus::InternalServerError => "INTERNAL_SERVER_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Tagged domain error with message and optional cause.
#[derive(Debug, Clone, thiserror::Error)]
#[error("[{tag}] {message}")]
pub struct DomainError {
    tag: ErrorTag,
    message: String,
    #[source]
    cause: Option<ErrorCause>,
}

impl DomainError {
    /// Creates a new domain error with the given tag.
    pub fn new(tag: ErrorTag, message: impl Into<String>) -> Self {
        Self {
            tag,
            message: message.into(),
            cause: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::ValidationError, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::BadRequestError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::UnauthorizedError, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::ForbiddenError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::NotFoundError, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::ConflictError, message)
    }

    pub fn inventory(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::InventoryError, message)
    }

    pub fn order(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::OrderError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::DatabaseError, message)
    }

    /// Attaches the underlying cause.
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn tag(&self) -> ErrorTag {
        self.tag
    }

    /// Status class derived from the tag.
    pub fn status(&self) -> HttpErrorStatus {
        self.tag.status()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }
}
