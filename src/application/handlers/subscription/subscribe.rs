//! SubscribeHandler - Command handler for starting a subscription.

use std::sync::Arc;

use super::details::{require_user, SubscriptionDetails};
use super::ActiveSubscriptionQuery;
use crate::domain::foundation::{ErrorCode, ProductPriceId, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{
    Clock, ProductPriceRepository, SubscriptionReader, SubscriptionRepository, UserRepository,
};

/// Command to subscribe a user to a product price.
#[derive(Debug, Clone)]
pub struct SubscribeCommand {
    pub user_id: UserId,
    pub product_price_id: ProductPriceId,
}

/// Result of a successful subscription.
#[derive(Debug, Clone)]
pub struct SubscribeResult {
    pub subscription: SubscriptionDetails,
}

/// Handler for starting subscriptions.
///
/// A user holds at most one active subscription per product price. The
/// check runs against a single clock read; storage rejects a second open
/// row for the pair if two requests race past the check.
pub struct SubscribeHandler {
    users: Arc<dyn UserRepository>,
    prices: Arc<dyn ProductPriceRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    active: ActiveSubscriptionQuery,
    clock: Arc<dyn Clock>,
}

impl SubscribeHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        prices: Arc<dyn ProductPriceRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        reader: Arc<dyn SubscriptionReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            prices,
            subscriptions,
            active: ActiveSubscriptionQuery::new(reader),
            clock,
        }
    }

    pub async fn handle(&self, cmd: SubscribeCommand) -> Result<SubscribeResult, SubscriptionError> {
        // 1. Resolve the user and the price
        require_user(self.users.as_ref(), &cmd.user_id).await?;
        let product_price = self
            .prices
            .find_by_id(&cmd.product_price_id)
            .await?
            .ok_or_else(|| SubscriptionError::product_price_not_found(cmd.product_price_id))?;

        // 2. One clock read for the whole operation
        let now = self.clock.now();

        // 3. Reject if already subscribed
        if self
            .active
            .find_active_for_user_and_price(&cmd.user_id, &cmd.product_price_id, now)
            .await?
            .is_some()
        {
            tracing::warn!(
                user_id = %cmd.user_id,
                product_price_id = %cmd.product_price_id,
                "Subscribe rejected: already subscribed"
            );
            return Err(SubscriptionError::already_subscribed(
                cmd.user_id,
                cmd.product_price_id,
            ));
        }

        // 4. Persist
        let subscription = Subscription::start(cmd.user_id, product_price.id, now);
        self.subscriptions.save(&subscription).await.map_err(|e| {
            if e.code == ErrorCode::AlreadySubscribed {
                tracing::warn!(
                    user_id = %cmd.user_id,
                    product_price_id = %cmd.product_price_id,
                    "Subscribe rejected by storage: already subscribed"
                );
                SubscriptionError::already_subscribed(cmd.user_id, cmd.product_price_id)
            } else {
                SubscriptionError::from(e)
            }
        })?;

        tracing::info!(
            subscription_id = %subscription.id(),
            user_id = %cmd.user_id,
            product_price_id = %cmd.product_price_id,
            start_date = %subscription.start_date().to_rfc3339(),
            "Subscription started"
        );

        Ok(SubscribeResult {
            subscription: SubscriptionDetails {
                subscription,
                product_price,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::memory::{
        InMemoryProductPriceRepository, InMemorySubscriptionStore, InMemoryUserRepository,
    };
    use crate::domain::catalog::{PricePeriod, ProductPrice, User};
    use crate::domain::foundation::{DomainError, ProductId, SubscriptionId, Timestamp};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    /// Storage that lost a race: the reader sees nothing, the write is refused.
    struct RacingSubscriptionStore;

    #[async_trait]
    impl SubscriptionRepository for RacingSubscriptionStore {
        async fn save(&self, _subscription: &Subscription) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::AlreadySubscribed, "unique violation"))
        }

        async fn update(&self, _subscription: &Subscription) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id_and_user(
            &self,
            _id: &SubscriptionId,
            _user_id: &UserId,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(None)
        }

        async fn delete_by_product_price(
            &self,
            _product_price_id: &ProductPriceId,
        ) -> Result<u64, DomainError> {
            Ok(0)
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Fixture
    // ════════════════════════════════════════════════════════════════════════════

    struct Fixture {
        users: Arc<InMemoryUserRepository>,
        prices: Arc<InMemoryProductPriceRepository>,
        store: Arc<InMemorySubscriptionStore>,
        clock: Arc<FixedClock>,
        user: User,
        price: ProductPrice,
    }

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    async fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserRepository::new());
        let prices = Arc::new(InMemoryProductPriceRepository::new());
        let user = User::create("jane@example.com", "Jane", "Doe").unwrap();
        let price = ProductPrice::create(ProductId::new(), PricePeriod::Monthly, 999).unwrap();
        users.save(&user).await.unwrap();
        prices.save(&price).await.unwrap();

        Fixture {
            users,
            prices,
            store: Arc::new(InMemorySubscriptionStore::new()),
            clock: Arc::new(FixedClock::new(ts("2026-02-16T10:30:00Z"))),
            user,
            price,
        }
    }

    fn handler(f: &Fixture) -> SubscribeHandler {
        SubscribeHandler::new(
            f.users.clone(),
            f.prices.clone(),
            f.store.clone(),
            f.store.clone(),
            f.clock.clone(),
        )
    }

    fn command(f: &Fixture) -> SubscribeCommand {
        SubscribeCommand {
            user_id: f.user.id,
            product_price_id: f.price.id,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn subscribe_starts_open_subscription_at_now() {
        let f = fixture().await;

        let result = handler(&f).handle(command(&f)).await.unwrap();
        let sub = &result.subscription.subscription;

        assert_eq!(sub.user_id(), f.user.id);
        assert_eq!(sub.product_price_id(), f.price.id);
        assert_eq!(sub.start_date(), ts("2026-02-16T10:30:00Z"));
        assert_eq!(sub.end_date(), None);
        assert_eq!(result.subscription.product_price, f.price);
        assert_eq!(f.store.len().await, 1);
    }

    #[tokio::test]
    async fn second_subscribe_is_rejected_without_writing() {
        let f = fixture().await;
        let handler = handler(&f);
        handler.handle(command(&f)).await.unwrap();

        let err = handler.handle(command(&f)).await.unwrap_err();

        assert_eq!(err, SubscriptionError::already_subscribed(f.user.id, f.price.id));
        assert_eq!(f.store.len().await, 1);
    }

    #[tokio::test]
    async fn subscription_ending_in_the_future_still_blocks() {
        let f = fixture().await;
        let mut existing = Subscription::start(f.user.id, f.price.id, ts("2026-01-10T00:00:00Z"));
        existing.terminate(ts("2026-03-10T00:00:00Z"));
        f.store.insert_unchecked(existing).await;

        let err = handler(&f).handle(command(&f)).await.unwrap_err();

        assert!(matches!(err, SubscriptionError::AlreadySubscribed { .. }));
    }

    #[tokio::test]
    async fn ended_subscription_allows_a_new_one() {
        let f = fixture().await;
        let mut existing = Subscription::start(f.user.id, f.price.id, ts("2025-12-10T00:00:00Z"));
        existing.terminate(ts("2026-02-10T00:00:00Z"));
        f.store.insert_unchecked(existing).await;

        handler(&f).handle(command(&f)).await.unwrap();

        assert_eq!(f.store.len().await, 2);
    }

    #[tokio::test]
    async fn unknown_user_is_reported() {
        let f = fixture().await;
        let cmd = SubscribeCommand {
            user_id: UserId::new(),
            product_price_id: f.price.id,
        };

        let err = handler(&f).handle(cmd.clone()).await.unwrap_err();

        assert_eq!(err, SubscriptionError::user_not_found(cmd.user_id));
    }

    #[tokio::test]
    async fn unknown_price_is_reported() {
        let f = fixture().await;
        let cmd = SubscribeCommand {
            user_id: f.user.id,
            product_price_id: ProductPriceId::new(),
        };

        let err = handler(&f).handle(cmd.clone()).await.unwrap_err();

        assert_eq!(err, SubscriptionError::product_price_not_found(cmd.product_price_id));
    }

    #[tokio::test]
    async fn duplicate_active_rows_surface_as_data_integrity() {
        let f = fixture().await;
        let now = ts("2026-01-01T00:00:00Z");
        f.store.insert_unchecked(Subscription::start(f.user.id, f.price.id, now)).await;
        f.store.insert_unchecked(Subscription::start(f.user.id, f.price.id, now)).await;

        let err = handler(&f).handle(command(&f)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DataIntegrity);
    }

    #[tokio::test]
    async fn storage_uniqueness_violation_maps_to_already_subscribed() {
        let f = fixture().await;
        let handler = SubscribeHandler::new(
            f.users.clone(),
            f.prices.clone(),
            Arc::new(RacingSubscriptionStore),
            f.store.clone(),
            f.clock.clone(),
        );

        let err = handler.handle(command(&f)).await.unwrap_err();

        assert_eq!(err, SubscriptionError::already_subscribed(f.user.id, f.price.id));
    }
}
