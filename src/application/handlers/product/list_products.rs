//! ListProductsHandler - Query handler listing the whole catalogue.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::application::response::{ServiceResult, ServiceSuccess};
use crate::application::use_case::UseCase;
use crate::domain::foundation::DomainError;
use crate::domain::product::Product;
use crate::ports::ProductRepository;

/// Request record for listing products. Reads no request sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsRequest {}

/// Handler for listing products.
pub struct ListProductsHandler {
    repository: Arc<dyn ProductRepository>,
}

impl ListProductsHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> ServiceResult<Vec<Product>> {
        let products = self.repository.find_all().await.map_err(|error| {
            DomainError::bad_request("Error when finding products").with_cause(error)
        })?;

        Ok(ServiceSuccess::ok("Products found", products))
    }
}

impl FromContext for ListProductsHandler {
    fn from_context(context: &DependencyContext) -> Result<Self, ContextError> {
        Ok(Self::new(context.resolve::<dyn ProductRepository>()?))
    }
}

#[async_trait]
impl UseCase for ListProductsHandler {
    type Input = ListProductsRequest;
    type Output = Vec<Product>;

    const NAME: &'static str = "list_products";

    async fn execute(&self, _input: Self::Input) -> ServiceResult<Self::Output> {
        self.handle().await
    }
}
