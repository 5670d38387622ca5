//! UnsubscribeHandler - Command handler for terminating a subscription.

use std::sync::Arc;

use super::details::{require_user, with_product_price, SubscriptionDetails};
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{compute_end_date, SubscriptionError};
use crate::ports::{Clock, ProductPriceRepository, SubscriptionRepository, UserRepository};

/// Command to terminate one of a user's subscriptions.
#[derive(Debug, Clone)]
pub struct UnsubscribeCommand {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
}

/// Result of a termination.
#[derive(Debug, Clone)]
pub struct UnsubscribeResult {
    pub subscription: SubscriptionDetails,
}

/// Handler for terminating subscriptions.
///
/// The end date follows the price's billing period, computed from a single
/// clock read. Terminating a subscription that is still active recomputes
/// and replaces its end date. Once the end date has passed the record is
/// final and further terminations are rejected.
pub struct UnsubscribeHandler {
    users: Arc<dyn UserRepository>,
    prices: Arc<dyn ProductPriceRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    clock: Arc<dyn Clock>,
}

impl UnsubscribeHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        prices: Arc<dyn ProductPriceRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            prices,
            subscriptions,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: UnsubscribeCommand,
    ) -> Result<UnsubscribeResult, SubscriptionError> {
        // 1. Resolve the subscription owned by the user, with its price
        require_user(self.users.as_ref(), &cmd.user_id).await?;
        let subscription = self
            .subscriptions
            .find_by_id_and_user(&cmd.subscription_id, &cmd.user_id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(cmd.subscription_id))?;
        let SubscriptionDetails {
            mut subscription,
            product_price,
        } = with_product_price(self.prices.as_ref(), subscription).await?;

        // 2. An ended subscription never gets a new active period
        let now = self.clock.now();
        if !subscription.is_active_at(now) {
            if let Some(end_date) = subscription.end_date() {
                tracing::warn!(
                    subscription_id = %subscription.id(),
                    end_date = %end_date.to_rfc3339(),
                    "Termination of ended subscription rejected"
                );
                return Err(SubscriptionError::already_ended(subscription.id(), end_date));
            }
        }

        // 3. Stamp the end of the current billing cycle
        let end_date = compute_end_date(now, subscription.start_date(), product_price.period);
        let previous_end = subscription.end_date();
        subscription.terminate(end_date);

        // 4. Persist
        self.subscriptions.update(&subscription).await?;

        if let Some(previous_end) = previous_end {
            tracing::info!(
                subscription_id = %subscription.id(),
                previous_end_date = %previous_end.to_rfc3339(),
                end_date = %end_date.to_rfc3339(),
                "Subscription end date recomputed"
            );
        } else {
            tracing::info!(
                subscription_id = %subscription.id(),
                user_id = %cmd.user_id,
                period = %product_price.period,
                end_date = %end_date.to_rfc3339(),
                "Subscription terminated"
            );
        }

        Ok(UnsubscribeResult {
            subscription: SubscriptionDetails {
                subscription,
                product_price,
            },
        })
    }
}
