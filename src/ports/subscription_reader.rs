//! Subscription reader port (read side).
//!
//! Activity queries take the reference instant as an argument so a whole
//! operation judges activity against a single clock read.

use crate::domain::foundation::{DomainError, ProductPriceId, Timestamp, UserId};
use crate::domain::subscription::Subscription;
use async_trait::async_trait;

/// Reader port for active subscription queries.
///
/// A subscription is active at `now` when its end date is absent or
/// strictly after `now`.
#[async_trait]
pub trait SubscriptionReader: Send + Sync {
    /// Every subscription of the user active at `now`. Order is unspecified.
    async fn find_active_by_user(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError>;

    /// Subscriptions of the user to one price active at `now`.
    ///
    /// Returns a list so callers can detect more than one row.
    async fn find_active_by_user_and_price(
        &self,
        user_id: &UserId,
        product_price_id: &ProductPriceId,
        now: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError>;
}
