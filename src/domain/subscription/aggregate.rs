//! Subscription aggregate.
//!
//! A subscription links one user to one product price for a span of time.
//! It refers to both by id only; neither side owns the other.

use crate::domain::foundation::{ProductPriceId, SubscriptionId, Timestamp, UserId};

/// A user's subscription to a product price.
///
/// # Invariants
///
/// - `start_date` is set once, at creation, and never changes
/// - `end_date` starts absent and is only ever set by [`Subscription::terminate`]
/// - active at `t` iff `end_date` is absent or strictly after `t`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    id: SubscriptionId,
    user_id: UserId,
    product_price_id: ProductPriceId,
    start_date: Timestamp,
    end_date: Option<Timestamp>,
}

impl Subscription {
    /// Starts a new open-ended subscription at `now`.
    pub fn start(user_id: UserId, product_price_id: ProductPriceId, now: Timestamp) -> Self {
        Self {
            id: SubscriptionId::new(),
            user_id,
            product_price_id,
            start_date: now,
            end_date: None,
        }
    }

    /// Rebuilds a subscription from stored fields.
    pub fn reconstitute(
        id: SubscriptionId,
        user_id: UserId,
        product_price_id: ProductPriceId,
        start_date: Timestamp,
        end_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_price_id,
            start_date,
            end_date,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn product_price_id(&self) -> ProductPriceId {
        self.product_price_id
    }

    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    pub fn end_date(&self) -> Option<Timestamp> {
        self.end_date
    }

    /// True when the subscription has not ended at `at`.
    ///
    /// An end date equal to `at` counts as ended.
    pub fn is_active_at(&self, at: Timestamp) -> bool {
        match self.end_date {
            None => true,
            Some(end) => end.is_after(&at),
        }
    }

    /// Stamps the termination instant.
    ///
    /// Calling this again replaces the previous end date.
    pub fn terminate(&mut self, end_date: Timestamp) {
        self.end_date = Some(end_date);
    }
}
