//! PostgreSQL implementation of ProductRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::domain::foundation::{DomainError, ProductId, Timestamp};
use crate::domain::product::Product;
use crate::ports::ProductRepository;

const SELECT_PRODUCT: &str = r#"
    SELECT internal_id, id, name, price, created_at, updated_at
    FROM products
"#;

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FromContext for PostgresProductRepository {
    fn from_context(context: &DependencyContext) -> Result<Self, ContextError> {
        Ok(Self::new(PgPool::clone(&*context.resolve::<PgPool>()?)))
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY internal_id", SELECT_PRODUCT))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Error when finding products").with_cause(e))?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_PRODUCT))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Error when finding product by ID").with_cause(e))?;

        row.map(row_to_product).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE name = $1", SELECT_PRODUCT))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database("Error when finding product by name").with_cause(e)
            })?;

        row.map(row_to_product).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_product(row: PgRow) -> Result<Product, DomainError> {
    let decode = |e: sqlx::Error| DomainError::database("Malformed product row").with_cause(e);

    let id: String = row.try_get("id").map_err(decode)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(decode)?;

    Ok(Product {
        internal_id: row.try_get("internal_id").map_err(decode)?,
        id: ProductId::new(id)?,
        name: row.try_get("name").map_err(decode)?,
        price: row.try_get("price").map_err(decode)?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
