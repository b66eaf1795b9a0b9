//! GetProductByIdHandler - Query handler for a single product by id.
//!
//! A product that does not exist is reported as a successful lookup with no
//! data. Only a failed lookup is an error.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::application::response::{ServiceResult, ServiceSuccess};
use crate::application::use_case::UseCase;
use crate::domain::foundation::{DomainError, ProductId};
use crate::domain::product::Product;
use crate::ports::ProductRepository;

/// Query for a product by id.
#[derive(Debug, Clone)]
pub struct GetProductByIdQuery {
    pub id: ProductId,
}

/// Path parameters of `GET /products/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductIdParams {
    pub id: String,
}

/// Request record: `{ params: { id } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetProductByIdRequest {
    pub params: ProductIdParams,
}

pub struct GetProductByIdHandler {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductByIdHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProductByIdQuery) -> ServiceResult<Product> {
        let product = self.repository.find_by_id(&query.id).await.map_err(|error| {
            DomainError::bad_request("Error when finding product").with_cause(error)
        })?;

        Ok(ServiceSuccess::ok("Product found", product))
    }
}

impl FromContext for GetProductByIdHandler {
    fn from_context(context: &DependencyContext) -> Result<Self, ContextError> {
        Ok(Self::new(context.resolve::<dyn ProductRepository>()?))
    }
}

#[async_trait]
impl UseCase for GetProductByIdHandler {
    type Input = GetProductByIdRequest;
    type Output = Product;

    const NAME: &'static str = "get_product_by_id";

    async fn execute(&self, input: Self::Input) -> ServiceResult<Self::Output> {
        let id = ProductId::new(input.params.id)?;
        self.handle(GetProductByIdQuery { id }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProductRepository;
    use crate::application::response::SuccessStatus;
    use crate::domain::foundation::ErrorTag;

    struct FailingProductRepository;

    #[async_trait]
    impl ProductRepository for FailingProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: &ProductId) -> Result<Option<Product>, DomainError> {
            Err(DomainError::database("Error when finding product by ID"))
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Product>, DomainError> {
            Ok(None)
        }
    }

    fn catalogue() -> InMemoryProductRepository {
        InMemoryProductRepository::with_products(vec![Product::new(
            1,
            ProductId::new("sourdough").unwrap(),
            "Sourdough",
            6.0,
        )])
    }

    fn request(id: &str) -> GetProductByIdRequest {
        GetProductByIdRequest {
            params: ProductIdParams { id: id.to_string() },
        }
    }

    #[tokio::test]
    async fn finds_existing_product() {
        let handler = GetProductByIdHandler::new(Arc::new(catalogue()));

        let response = handler.execute(request("sourdough")).await.unwrap();

        assert_eq!(response.message, "Product found");
        assert_eq!(response.data.unwrap().name, "Sourdough");
    }

    #[tokio::test]
    async fn unknown_id_is_success_with_no_data() {
        let handler = GetProductByIdHandler::new(Arc::new(catalogue()));

        let response = handler.execute(request("does-not-exist")).await.unwrap();

        assert_eq!(response.status, SuccessStatus::Ok);
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn blank_id_is_validation_error() {
        let handler = GetProductByIdHandler::new(Arc::new(catalogue()));

        let error = handler.execute(request("  ")).await.unwrap_err();

        assert_eq!(error.tag(), ErrorTag::ValidationError);
    }

    #[tokio::test]
    async fn database_error_is_not_surfaced_as_is() {
        let handler = GetProductByIdHandler::new(Arc::new(FailingProductRepository));

        let error = handler.execute(request("sourdough")).await.unwrap_err();

        assert_eq!(error.tag(), ErrorTag::BadRequestError);
        assert_ne!(error.tag(), ErrorTag::DatabaseError);
    }
}
