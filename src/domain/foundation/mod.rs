//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and the error taxonomy that form the
//! vocabulary of the order desk domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCause, ErrorTag, HttpErrorStatus};
pub use ids::{OrderId, ProductId};
pub use timestamp::Timestamp;
