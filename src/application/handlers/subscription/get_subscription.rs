//! GetSubscriptionHandler - Query handler for one of a user's subscriptions.

use std::sync::Arc;

use super::details::{require_user, with_product_price, SubscriptionDetails};
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::SubscriptionError;
use crate::ports::{ProductPriceRepository, SubscriptionRepository, UserRepository};

/// Query for a single subscription owned by a user.
#[derive(Debug, Clone)]
pub struct GetSubscriptionQuery {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
}

#[derive(Debug, Clone)]
pub struct GetSubscriptionResult {
    pub subscription: SubscriptionDetails,
}

/// Returns the subscription whether or not it is still active.
pub struct GetSubscriptionHandler {
    users: Arc<dyn UserRepository>,
    prices: Arc<dyn ProductPriceRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl GetSubscriptionHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        prices: Arc<dyn ProductPriceRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            users,
            prices,
            subscriptions,
        }
    }

    pub async fn handle(
        &self,
        query: GetSubscriptionQuery,
    ) -> Result<GetSubscriptionResult, SubscriptionError> {
        require_user(self.users.as_ref(), &query.user_id).await?;
        let subscription = self
            .subscriptions
            .find_by_id_and_user(&query.subscription_id, &query.user_id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(query.subscription_id))?;

        Ok(GetSubscriptionResult {
            subscription: with_product_price(self.prices.as_ref(), subscription).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryProductPriceRepository, InMemorySubscriptionStore, InMemoryUserRepository,
    };
    use crate::domain::catalog::{PricePeriod, ProductPrice, User};
    use crate::domain::foundation::{ProductId, Timestamp};
    use crate::domain::subscription::Subscription;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    #[tokio::test]
    async fn returns_ended_subscription_with_its_price() {
        let users = Arc::new(InMemoryUserRepository::new());
        let prices = Arc::new(InMemoryProductPriceRepository::new());
        let store = Arc::new(InMemorySubscriptionStore::new());
        let user = User::create("jane@example.com", "Jane", "Doe").unwrap();
        users.save(&user).await.unwrap();
        let price = ProductPrice::create(ProductId::new(), PricePeriod::Yearly, 9900).unwrap();
        prices.save(&price).await.unwrap();
        let mut sub = Subscription::start(user.id, price.id, ts("2024-01-01T00:00:00Z"));
        sub.terminate(ts("2025-01-01T00:00:00Z"));
        store.insert_unchecked(sub.clone()).await;

        let handler = GetSubscriptionHandler::new(users, prices, store);
        let result = handler
            .handle(GetSubscriptionQuery {
                user_id: user.id,
                subscription_id: sub.id(),
            })
            .await
            .unwrap();

        assert_eq!(result.subscription.subscription, sub);
        assert_eq!(result.subscription.product_price, price);
    }

    #[tokio::test]
    async fn missing_subscription_is_not_found() {
        let users = Arc::new(InMemoryUserRepository::new());
        let user = User::create("jane@example.com", "Jane", "Doe").unwrap();
        users.save(&user).await.unwrap();
        let handler = GetSubscriptionHandler::new(
            users,
            Arc::new(InMemoryProductPriceRepository::new()),
            Arc::new(InMemorySubscriptionStore::new()),
        );
        let subscription_id = SubscriptionId::new();

        let err = handler
            .handle(GetSubscriptionQuery {
                user_id: user.id,
                subscription_id,
            })
            .await
            .unwrap_err();

        assert_eq!(err, SubscriptionError::not_found(subscription_id));
    }
}
