//! PostgreSQL implementation of SubscriptionReader.

use crate::domain::foundation::{DomainError, ProductPriceId, Timestamp, UserId};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionReader;
use async_trait::async_trait;
use sqlx::PgPool;

use super::subscription_repository::SubscriptionRow;

/// PostgreSQL implementation of the SubscriptionReader port.
pub struct PostgresSubscriptionReader {
    pool: PgPool,
}

impl PostgresSubscriptionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionReader for PostgresSubscriptionReader {
    async fn find_active_by_user(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError> {
        let rows: Vec<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, product_price_id, start_date, end_date
            FROM subscriptions
            WHERE user_id = $1
              AND (end_date IS NULL OR end_date > $2)
            ORDER BY start_date
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(now.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to find active subscriptions: {}", e))
        })?;

        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    async fn find_active_by_user_and_price(
        &self,
        user_id: &UserId,
        product_price_id: &ProductPriceId,
        now: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError> {
        let rows: Vec<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, product_price_id, start_date, end_date
            FROM subscriptions
            WHERE user_id = $1
              AND product_price_id = $2
              AND (end_date IS NULL OR end_date > $3)
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(product_price_id.as_uuid())
        .bind(now.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to find active subscriptions: {}", e))
        })?;

        Ok(rows.into_iter().map(Subscription::from).collect())
    }
}
