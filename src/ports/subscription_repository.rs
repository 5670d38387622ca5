//! Subscription repository port (write side).
//!
//! # Design
//!
//! - **One open row per pair**: storage rejects a second subscription with
//!   no end date for the same (user, product price) with `AlreadySubscribed`
//! - **No retries**: writes are not idempotent, failures go straight back

use crate::domain::foundation::{DomainError, ProductPriceId, SubscriptionId, UserId};
use crate::domain::subscription::Subscription;
use async_trait::async_trait;

/// Repository port for Subscription aggregate persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Save a new subscription.
    ///
    /// # Errors
    ///
    /// - `AlreadySubscribed` if an open subscription exists for the pair
    /// - `DatabaseError` on persistence failure
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Update an existing subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if the subscription doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Find a subscription by id, only if it belongs to `user_id`.
    async fn find_by_id_and_user(
        &self,
        id: &SubscriptionId,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError>;

    /// Delete every subscription to a product price.
    ///
    /// Returns the number of rows removed.
    async fn delete_by_product_price(
        &self,
        product_price_id: &ProductPriceId,
    ) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SubscriptionRepository) {}
    }
}
