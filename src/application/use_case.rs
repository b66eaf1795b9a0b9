//! The `UseCase` seam between the controller pipeline and business logic.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::response::ServiceResult;

/// A single business operation.
///
/// `Input` is the typed shape of the request record the operation reads
/// (for example `{ body: {...} }` or `{ params: { id } }`). Decoding the
/// record into `Input` is where shape enforcement happens; a mismatch is a
/// `ValidationError`.
#[async_trait]
pub trait UseCase: Send + Sync + 'static {
    type Input: DeserializeOwned + Send + 'static;
    type Output: Serialize + Send + 'static;

    /// Name used when reporting faults.
    const NAME: &'static str;

    async fn execute(&self, input: Self::Input) -> ServiceResult<Self::Output>;
}
