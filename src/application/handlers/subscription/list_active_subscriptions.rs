//! ListActiveSubscriptionsHandler - Query handler for a user's active subscriptions.

use std::sync::Arc;

use super::details::{require_user, with_product_price, SubscriptionDetails};
use super::ActiveSubscriptionQuery;
use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::{Clock, ProductPriceRepository, SubscriptionReader, UserRepository};

/// Query for the subscriptions a user currently holds.
#[derive(Debug, Clone)]
pub struct ListActiveSubscriptionsQuery {
    pub user_id: UserId,
}

/// Active subscriptions, in no particular order.
#[derive(Debug, Clone)]
pub struct ListActiveSubscriptionsResult {
    pub subscriptions: Vec<SubscriptionDetails>,
}

pub struct ListActiveSubscriptionsHandler {
    users: Arc<dyn UserRepository>,
    prices: Arc<dyn ProductPriceRepository>,
    active: ActiveSubscriptionQuery,
    clock: Arc<dyn Clock>,
}

impl ListActiveSubscriptionsHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        prices: Arc<dyn ProductPriceRepository>,
        reader: Arc<dyn SubscriptionReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            prices,
            active: ActiveSubscriptionQuery::new(reader),
            clock,
        }
    }

    pub async fn handle(
        &self,
        query: ListActiveSubscriptionsQuery,
    ) -> Result<ListActiveSubscriptionsResult, SubscriptionError> {
        require_user(self.users.as_ref(), &query.user_id).await?;

        let now = self.clock.now();
        let active = self.active.find_active_for_user(&query.user_id, now).await?;

        let mut subscriptions = Vec::with_capacity(active.len());
        for subscription in active {
            subscriptions.push(with_product_price(self.prices.as_ref(), subscription).await?);
        }

        Ok(ListActiveSubscriptionsResult { subscriptions })
    }
}
