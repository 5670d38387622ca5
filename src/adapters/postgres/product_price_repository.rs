//! PostgreSQL implementation of ProductPriceRepository.

use crate::domain::catalog::{PricePeriod, ProductPrice};
use crate::domain::foundation::{DomainError, ErrorCode, ProductId, ProductPriceId};
use crate::ports::ProductPriceRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the ProductPriceRepository port.
pub struct PostgresProductPriceRepository {
    pool: PgPool,
}

impl PostgresProductPriceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProductPriceRow {
    id: Uuid,
    product_id: Uuid,
    price_period: String,
    price: i64,
}

impl TryFrom<ProductPriceRow> for ProductPrice {
    type Error = DomainError;

    fn try_from(row: ProductPriceRow) -> Result<Self, Self::Error> {
        let period: PricePeriod = row.price_period.parse().map_err(|e| {
            DomainError::database(format!("Invalid price_period value: {}", e))
        })?;

        Ok(ProductPrice {
            id: ProductPriceId::from_uuid(row.id),
            product_id: ProductId::from_uuid(row.product_id),
            period,
            price: row.price,
        })
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::ProductPriceNotFound, "Product price not found")
}

#[async_trait]
impl ProductPriceRepository for PostgresProductPriceRepository {
    async fn save(&self, price: &ProductPrice) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO product_prices (id, product_id, price_period, price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(price.id.as_uuid())
        .bind(price.product_id.as_uuid())
        .bind(price.period.as_str())
        .bind(price.price)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save product price: {}", e)))?;

        Ok(())
    }

    async fn update(&self, price: &ProductPrice) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE product_prices SET price_period = $2, price = $3 WHERE id = $1",
        )
        .bind(price.id.as_uuid())
        .bind(price.period.as_str())
        .bind(price.price)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update product price: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ProductPriceId) -> Result<Option<ProductPrice>, DomainError> {
        let row: Option<ProductPriceRow> = sqlx::query_as(
            "SELECT id, product_id, price_period, price FROM product_prices WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find product price: {}", e)))?;

        row.map(ProductPrice::try_from).transpose()
    }

    async fn find_by_id_and_product(
        &self,
        id: &ProductPriceId,
        product_id: &ProductId,
    ) -> Result<Option<ProductPrice>, DomainError> {
        let row: Option<ProductPriceRow> = sqlx::query_as(
            r#"
            SELECT id, product_id, price_period, price
            FROM product_prices
            WHERE id = $1 AND product_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find product price: {}", e)))?;

        row.map(ProductPrice::try_from).transpose()
    }

    async fn find_by_product(&self, product_id: &ProductId) -> Result<Vec<ProductPrice>, DomainError> {
        let rows: Vec<ProductPriceRow> = sqlx::query_as(
            r#"
            SELECT id, product_id, price_period, price
            FROM product_prices
            WHERE product_id = $1
            ORDER BY price_period, price
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list product prices: {}", e)))?;

        rows.into_iter().map(ProductPrice::try_from).collect()
    }

    async fn delete(&self, id: &ProductPriceId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM product_prices WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete product price: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_known_period_converts() {
        let row = ProductPriceRow {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            price_period: "yearly".to_string(),
            price: 9900,
        };
        let price = ProductPrice::try_from(row).unwrap();
        assert_eq!(price.period, PricePeriod::Yearly);
        assert_eq!(price.price, 9900);
    }

    #[test]
    fn row_with_unknown_period_is_a_database_error() {
        let row = ProductPriceRow {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            price_period: "weekly".to_string(),
            price: 100,
        };
        let err = ProductPrice::try_from(row).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
