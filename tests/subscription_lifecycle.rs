//! Integration tests for the subscription lifecycle.
//!
//! Drives the application handlers over in-memory adapters with a clock the
//! test moves forward:
//! 1. Subscribing blocks duplicates while a subscription is active
//! 2. Unsubscribing keeps the subscription active until the cycle ends
//!    and an ended subscription stays ended
//! 3. Catalog deletes cascade to subscriptions

use std::sync::Arc;

use subscription_billing::adapters::http::AppState;
use subscription_billing::adapters::FixedClock;
use subscription_billing::application::handlers::product::{
    CreateProductCommand, DeleteProductCommand, NewPrice,
};
use subscription_billing::application::handlers::product_price::DeleteProductPriceCommand;
use subscription_billing::application::handlers::subscription::{
    GetSubscriptionQuery, ListActiveSubscriptionsQuery, SubscribeCommand, UnsubscribeCommand,
};
use subscription_billing::application::handlers::user::CreateUserCommand;
use subscription_billing::domain::catalog::{PricePeriod, ProductPrice};
use subscription_billing::domain::foundation::{Timestamp, UserId};
use subscription_billing::domain::subscription::SubscriptionError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn ts(s: &str) -> Timestamp {
    Timestamp::parse_rfc3339(s).unwrap()
}

struct World {
    state: AppState,
    clock: Arc<FixedClock>,
}

impl World {
    fn at(now: &str) -> Self {
        let clock = Arc::new(FixedClock::new(ts(now)));
        let state = AppState::in_memory_with_clock(clock.clone());
        Self { state, clock }
    }

    fn travel_to(&self, now: &str) {
        self.clock.set(ts(now));
    }

    async fn user(&self, email: &str) -> UserId {
        let cmd = CreateUserCommand {
            email: email.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        };
        self.state.create_user_handler().handle(cmd).await.unwrap().user.id
    }

    /// Creates a product with one monthly and one yearly price.
    async fn product(&self, name: &str) -> (ProductPrice, ProductPrice) {
        let cmd = CreateProductCommand {
            name: name.to_string(),
            description: "Test product".to_string(),
            prices: vec![
                NewPrice { period: PricePeriod::Monthly, price: 999 },
                NewPrice { period: PricePeriod::Yearly, price: 9900 },
            ],
        };
        let details = self.state.create_product_handler().handle(cmd).await.unwrap().product;
        let monthly = details.prices.iter().find(|p| p.period == PricePeriod::Monthly).unwrap();
        let yearly = details.prices.iter().find(|p| p.period == PricePeriod::Yearly).unwrap();
        (monthly.clone(), yearly.clone())
    }

    async fn subscribe(
        &self,
        user_id: UserId,
        price: &ProductPrice,
    ) -> Result<subscription_billing::application::SubscriptionDetails, SubscriptionError> {
        let cmd = SubscribeCommand {
            user_id,
            product_price_id: price.id,
        };
        self.state
            .subscribe_handler()
            .handle(cmd)
            .await
            .map(|r| r.subscription)
    }

    async fn active(&self, user_id: UserId) -> usize {
        let query = ListActiveSubscriptionsQuery { user_id };
        self.state
            .list_active_subscriptions_handler()
            .handle(query)
            .await
            .unwrap()
            .subscriptions
            .len()
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn monthly_subscription_stays_active_until_clamped_billing_day() {
    let world = World::at("2026-01-31T09:30:00Z");
    let user_id = world.user("grace@example.com").await;
    let (monthly, _) = world.product("Streaming").await;

    let created = world.subscribe(user_id, &monthly).await.unwrap();
    assert_eq!(created.subscription.start_date(), ts("2026-01-31T09:30:00Z"));
    assert_eq!(created.subscription.end_date(), None);

    world.travel_to("2026-02-10T12:00:00Z");
    let cmd = UnsubscribeCommand {
        user_id,
        subscription_id: created.subscription.id(),
    };
    let ended = world.state.unsubscribe_handler().handle(cmd).await.unwrap();
    assert_eq!(ended.subscription.subscription.end_date(), Some(ts("2026-02-28T00:00:00Z")));

    // Still inside the paid cycle
    world.travel_to("2026-02-27T23:59:59Z");
    assert_eq!(world.active(user_id).await, 1);
    let err = world.subscribe(user_id, &monthly).await.unwrap_err();
    assert!(matches!(err, SubscriptionError::AlreadySubscribed { .. }));

    // The end instant itself is no longer active
    world.travel_to("2026-02-28T00:00:00Z");
    assert_eq!(world.active(user_id).await, 0);
    let renewed = world.subscribe(user_id, &monthly).await.unwrap();
    assert_ne!(renewed.subscription.id(), created.subscription.id());
    assert_eq!(world.active(user_id).await, 1);
}

#[tokio::test]
async fn yearly_subscription_started_on_leap_day_ends_on_march_first() {
    let world = World::at("2024-02-29T08:15:00Z");
    let user_id = world.user("grace@example.com").await;
    let (_, yearly) = world.product("Streaming").await;
    let created = world.subscribe(user_id, &yearly).await.unwrap();

    world.travel_to("2024-11-02T00:00:00Z");
    let cmd = UnsubscribeCommand {
        user_id,
        subscription_id: created.subscription.id(),
    };
    let ended = world.state.unsubscribe_handler().handle(cmd).await.unwrap();

    assert_eq!(ended.subscription.subscription.end_date(), Some(ts("2025-03-01T08:15:00Z")));
}

#[tokio::test]
async fn different_prices_of_one_product_can_both_be_active() {
    let world = World::at("2026-03-01T00:00:00Z");
    let user_id = world.user("grace@example.com").await;
    let (monthly, yearly) = world.product("Streaming").await;

    world.subscribe(user_id, &monthly).await.unwrap();
    world.subscribe(user_id, &yearly).await.unwrap();

    assert_eq!(world.active(user_id).await, 2);
}

#[tokio::test]
async fn subscriptions_are_private_to_their_user() {
    let world = World::at("2026-03-01T00:00:00Z");
    let owner = world.user("grace@example.com").await;
    let other = world.user("alan@example.com").await;
    let (monthly, _) = world.product("Streaming").await;
    let created = world.subscribe(owner, &monthly).await.unwrap();

    let query = GetSubscriptionQuery {
        user_id: other,
        subscription_id: created.subscription.id(),
    };
    let err = world.state.get_subscription_handler().handle(query).await.unwrap_err();

    assert_eq!(err, SubscriptionError::not_found(created.subscription.id()));
    assert_eq!(world.active(other).await, 0);
}

#[tokio::test]
async fn repeated_unsubscribe_before_end_recomputes_end_date() {
    let world = World::at("2026-01-05T00:00:00Z");
    let user_id = world.user("grace@example.com").await;
    let (monthly, _) = world.product("Streaming").await;
    let created = world.subscribe(user_id, &monthly).await.unwrap();
    let cmd = UnsubscribeCommand {
        user_id,
        subscription_id: created.subscription.id(),
    };

    world.travel_to("2026-02-16T00:00:00Z");
    let first = world.state.unsubscribe_handler().handle(cmd.clone()).await.unwrap();
    world.travel_to("2026-03-04T23:00:00Z");
    let second = world.state.unsubscribe_handler().handle(cmd).await.unwrap();

    assert_eq!(first.subscription.subscription.end_date(), Some(ts("2026-03-05T00:00:00Z")));
    assert_eq!(second.subscription.subscription.end_date(), Some(ts("2026-03-05T00:00:00Z")));
    assert_eq!(world.active(user_id).await, 1);
}

#[tokio::test]
async fn ended_subscription_stays_ended_after_resubscribing() {
    let world = World::at("2026-01-05T00:00:00Z");
    let user_id = world.user("grace@example.com").await;
    let (monthly, _) = world.product("Streaming").await;
    let old = world.subscribe(user_id, &monthly).await.unwrap();
    let old_cmd = UnsubscribeCommand {
        user_id,
        subscription_id: old.subscription.id(),
    };

    world.travel_to("2026-02-16T00:00:00Z");
    world.state.unsubscribe_handler().handle(old_cmd.clone()).await.unwrap();

    world.travel_to("2026-03-10T00:00:00Z");
    assert_eq!(world.active(user_id).await, 0);
    let renewed = world.subscribe(user_id, &monthly).await.unwrap();

    let err = world.state.unsubscribe_handler().handle(old_cmd).await.unwrap_err();
    assert_eq!(
        err,
        SubscriptionError::already_ended(old.subscription.id(), ts("2026-03-05T00:00:00Z"))
    );

    let query = ListActiveSubscriptionsQuery { user_id };
    let active = world
        .state
        .list_active_subscriptions_handler()
        .handle(query)
        .await
        .unwrap()
        .subscriptions;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].subscription.id(), renewed.subscription.id());

    let err = world.subscribe(user_id, &monthly).await.unwrap_err();
    assert!(matches!(err, SubscriptionError::AlreadySubscribed { .. }));
}

// =============================================================================
// Cascades
// =============================================================================

#[tokio::test]
async fn deleting_a_price_removes_its_subscriptions() {
    let world = World::at("2026-03-01T00:00:00Z");
    let user_id = world.user("grace@example.com").await;
    let (monthly, yearly) = world.product("Streaming").await;
    world.subscribe(user_id, &monthly).await.unwrap();
    world.subscribe(user_id, &yearly).await.unwrap();

    let cmd = DeleteProductPriceCommand {
        product_id: monthly.product_id,
        product_price_id: monthly.id,
    };
    world.state.delete_product_price_handler().handle(cmd).await.unwrap();

    assert_eq!(world.active(user_id).await, 1);
    let err = world.subscribe(user_id, &monthly).await.unwrap_err();
    assert_eq!(err, SubscriptionError::product_price_not_found(monthly.id));
}

#[tokio::test]
async fn deleting_a_product_removes_prices_and_subscriptions() {
    let world = World::at("2026-03-01T00:00:00Z");
    let user_id = world.user("grace@example.com").await;
    let (monthly, yearly) = world.product("Streaming").await;
    world.subscribe(user_id, &monthly).await.unwrap();
    world.subscribe(user_id, &yearly).await.unwrap();

    let cmd = DeleteProductCommand {
        product_id: monthly.product_id,
    };
    world.state.delete_product_handler().handle(cmd).await.unwrap();

    assert_eq!(world.active(user_id).await, 0);
    assert!(world.state.list_products_handler().handle().await.unwrap().is_empty());
}
