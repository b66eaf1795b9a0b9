//! GetProductByNameHandler - Query handler for a product by its unique name.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::application::response::{ServiceResult, ServiceSuccess};
use crate::application::use_case::UseCase;
use crate::domain::foundation::DomainError;
use crate::domain::product::Product;
use crate::ports::ProductRepository;

#[derive(Debug, Clone)]
pub struct GetProductByNameQuery {
    pub name: String,
}

/// Query string of `GET /products?name=`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductNameParams {
    pub name: String,
}

/// Request record: `{ query: { name } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetProductByNameRequest {
    pub query: ProductNameParams,
}

pub struct GetProductByNameHandler {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductByNameHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProductByNameQuery) -> ServiceResult<Product> {
        if query.name.trim().is_empty() {
            return Err(DomainError::validation("Product name cannot be empty"));
        }

        let product = self
            .repository
            .find_by_name(&query.name)
            .await
            .map_err(|error| DomainError::bad_request("Error when finding product").with_cause(error))?;

        Ok(ServiceSuccess::ok("Product found", product))
    }
}

impl FromContext for GetProductByNameHandler {
    fn from_context(context: &DependencyContext) -> Result<Self, ContextError> {
        Ok(Self::new(context.resolve::<dyn ProductRepository>()?))
    }
}

#[async_trait]
impl UseCase for GetProductByNameHandler {
    type Input = GetProductByNameRequest;
    type Output = Product;

    const NAME: &'static str = "get_product_by_name";

    async fn execute(&self, input: Self::Input) -> ServiceResult<Self::Output> {
        self.handle(GetProductByNameQuery {
            name: input.query.name,
        })
        .await
    }
}
