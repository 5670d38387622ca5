//! PostgreSQL implementation of ProductRepository.

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::ProductRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::pool::violated_constraint;

const NAME_CONSTRAINT: &str = "products_name_key";

/// PostgreSQL implementation of the ProductRepository port.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from_uuid(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

fn write_error(e: sqlx::Error, product: &Product, action: &str) -> DomainError {
    if violated_constraint(&e) == Some(NAME_CONSTRAINT) {
        return DomainError::new(ErrorCode::DuplicateProductName, "Product name is already in use")
            .with_detail("value", product.name.clone());
    }
    DomainError::database(format!("Failed to {} product: {}", action, e))
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::ProductNotFound, "Product not found")
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn save(&self, product: &Product) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO products (id, name, description) VALUES ($1, $2, $3)")
            .bind(product.id.as_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, product, "save"))?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE products SET name = $2, description = $3 WHERE id = $1")
            .bind(product.id.as_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, product, "update"))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let row: Option<ProductRow> =
            sqlx::query_as("SELECT id, name, description FROM products WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find product: {}", e)))?;

        Ok(row.map(Product::from))
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as("SELECT id, name, description FROM products ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to list products: {}", e)))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete product: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }
}
