//! In-memory subscription store.
//!
//! Implements both the write port and the reader port over one map so
//! that reads observe writes immediately.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, ProductPriceId, SubscriptionId, Timestamp, UserId,
};
use crate::domain::subscription::Subscription;
use crate::ports::{SubscriptionReader, SubscriptionRepository};

/// In-memory subscription store.
///
/// At most one subscription without an end date may exist per
/// (user, product price); `save` checks this under the write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubscriptionStore {
    subscriptions: Arc<RwLock<HashMap<SubscriptionId, Subscription>>>,
}

impl InMemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a subscription without any uniqueness check.
    ///
    /// Lets tests build states the normal write path refuses.
    pub async fn insert_unchecked(&self, subscription: Subscription) {
        self.subscriptions
            .write()
            .await
            .insert(subscription.id(), subscription);
    }

    /// Number of stored subscriptions, active or not.
    pub async fn len(&self) -> usize {
        self.subscriptions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionStore {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        let open_exists = subscriptions.values().any(|s| {
            s.user_id() == subscription.user_id()
                && s.product_price_id() == subscription.product_price_id()
                && s.end_date().is_none()
        });
        if subscription.end_date().is_none() && open_exists {
            return Err(DomainError::new(
                ErrorCode::AlreadySubscribed,
                "User is already subscribed to this product price",
            ));
        }
        subscriptions.insert(subscription.id(), subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        match subscriptions.get_mut(&subscription.id()) {
            Some(stored) => {
                *stored = subscription.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                "Subscription not found",
            )),
        }
    }

    async fn find_by_id_and_user(
        &self,
        id: &SubscriptionId,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .get(id)
            .filter(|s| s.user_id() == *user_id)
            .cloned())
    }

    async fn delete_by_product_price(
        &self,
        product_price_id: &ProductPriceId,
    ) -> Result<u64, DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        let before = subscriptions.len();
        subscriptions.retain(|_, s| s.product_price_id() != *product_price_id);
        Ok((before - subscriptions.len()) as u64)
    }
}

#[async_trait]
impl SubscriptionReader for InMemorySubscriptionStore {
    async fn find_active_by_user(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError> {
        let mut active: Vec<Subscription> = self
            .subscriptions
            .read()
            .await
            .values()
            .filter(|s| s.user_id() == *user_id && s.is_active_at(now))
            .cloned()
            .collect();
        active.sort_by_key(|s| s.start_date());
        Ok(active)
    }

    async fn find_active_by_user_and_price(
        &self,
        user_id: &UserId,
        product_price_id: &ProductPriceId,
        now: Timestamp,
    ) -> Result<Vec<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .values()
            .filter(|s| {
                s.user_id() == *user_id
                    && s.product_price_id() == *product_price_id
                    && s.is_active_at(now)
            })
            .cloned()
            .collect())
    }
}
