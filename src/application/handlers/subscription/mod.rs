//! Subscription handlers.
//!
//! ## Commands
//! - Subscribing a user to a product price
//! - Terminating a subscription at the end of its billing cycle
//!
//! ## Queries
//! - Listing a user's active subscriptions
//! - Getting one subscription
//!
//! `ActiveSubscriptionQuery` is the shared read-side service the handlers
//! use to judge activity.

mod active_subscriptions;
mod details;
mod get_subscription;
mod list_active_subscriptions;
mod subscribe;
mod unsubscribe;

pub use active_subscriptions::ActiveSubscriptionQuery;
pub use details::SubscriptionDetails;

// Commands
pub use subscribe::{SubscribeCommand, SubscribeHandler, SubscribeResult};
pub use unsubscribe::{UnsubscribeCommand, UnsubscribeHandler, UnsubscribeResult};

// Queries
pub use get_subscription::{GetSubscriptionHandler, GetSubscriptionQuery, GetSubscriptionResult};
pub use list_active_subscriptions::{
    ListActiveSubscriptionsHandler, ListActiveSubscriptionsQuery, ListActiveSubscriptionsResult,
};
