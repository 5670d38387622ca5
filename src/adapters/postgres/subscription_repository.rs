//! PostgreSQL implementation of SubscriptionRepository.

use crate::domain::foundation::{
    DomainError, ErrorCode, ProductPriceId, SubscriptionId, Timestamp, UserId,
};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::pool::violated_constraint;

/// Partial unique index over open subscriptions per (user, price).
const ONE_OPEN_PER_PAIR: &str = "subscriptions_one_open_per_pair";

/// PostgreSQL implementation of the SubscriptionRepository port.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct SubscriptionRow {
    id: Uuid,
    user_id: Uuid,
    product_price_id: Uuid,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
}

impl From<SubscriptionRow> for Subscription {
    fn from(row: SubscriptionRow) -> Self {
        Subscription::reconstitute(
            SubscriptionId::from_uuid(row.id),
            UserId::from_uuid(row.user_id),
            ProductPriceId::from_uuid(row.product_price_id),
            Timestamp::from_datetime(row.start_date),
            row.end_date.map(Timestamp::from_datetime),
        )
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (id, user_id, product_price_id, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(subscription.id().as_uuid())
        .bind(subscription.user_id().as_uuid())
        .bind(subscription.product_price_id().as_uuid())
        .bind(*subscription.start_date().as_datetime())
        .bind(subscription.end_date().map(|end| *end.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if violated_constraint(&e) == Some(ONE_OPEN_PER_PAIR) {
                return DomainError::new(
                    ErrorCode::AlreadySubscribed,
                    "User is already subscribed to this product price",
                );
            }
            DomainError::database(format!("Failed to save subscription: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE subscriptions SET end_date = $2 WHERE id = $1")
            .bind(subscription.id().as_uuid())
            .bind(subscription.end_date().map(|end| *end.as_datetime()))
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update subscription: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                "Subscription not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id_and_user(
        &self,
        id: &SubscriptionId,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, product_price_id, start_date, end_date
            FROM subscriptions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find subscription: {}", e)))?;

        Ok(row.map(Subscription::from))
    }

    async fn delete_by_product_price(
        &self,
        product_price_id: &ProductPriceId,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE product_price_id = $1")
            .bind(product_price_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete subscriptions: {}", e)))?;

        Ok(result.rows_affected())
    }
}
