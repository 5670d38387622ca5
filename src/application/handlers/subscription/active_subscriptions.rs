//! ActiveSubscriptionQuery - read-side service answering "is it active".
//!
//! Every method takes the reference instant from the caller. Handlers read
//! the clock once per operation and pass that instant to every query.

use std::sync::Arc;

use crate::domain::foundation::{ProductPriceId, Timestamp, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionReader;

/// Active subscription queries over a [`SubscriptionReader`].
#[derive(Clone)]
pub struct ActiveSubscriptionQuery {
    reader: Arc<dyn SubscriptionReader>,
}

impl ActiveSubscriptionQuery {
    pub fn new(reader: Arc<dyn SubscriptionReader>) -> Self {
        Self { reader }
    }

    /// True when `subscription` has no end date or ends after `now`.
    pub fn is_active(subscription: &Subscription, now: Timestamp) -> bool {
        subscription.is_active_at(now)
    }

    /// Every subscription of the user active at `now`, in no particular order.
    pub async fn find_active_for_user(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> Result<Vec<Subscription>, SubscriptionError> {
        Ok(self.reader.find_active_by_user(user_id, now).await?)
    }

    /// The user's subscription to `product_price_id` active at `now`, if any.
    ///
    /// # Errors
    ///
    /// `DataIntegrity` when storage holds more than one.
    pub async fn find_active_for_user_and_price(
        &self,
        user_id: &UserId,
        product_price_id: &ProductPriceId,
        now: Timestamp,
    ) -> Result<Option<Subscription>, SubscriptionError> {
        let mut active = self
            .reader
            .find_active_by_user_and_price(user_id, product_price_id, now)
            .await?;

        if active.len() > 1 {
            tracing::error!(
                user_id = %user_id,
                product_price_id = %product_price_id,
                count = active.len(),
                "More than one active subscription for the same product price"
            );
            return Err(SubscriptionError::data_integrity(
                *user_id,
                *product_price_id,
                active.len(),
            ));
        }

        Ok(active.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    /// Returns its rows for every query, recording the instants it was asked about.
    struct MockSubscriptionReader {
        rows: Vec<Subscription>,
        seen_instants: Mutex<Vec<Timestamp>>,
        fail: bool,
    }

    impl MockSubscriptionReader {
        fn with_rows(rows: Vec<Subscription>) -> Self {
            Self {
                rows,
                seen_instants: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                rows: Vec::new(),
                seen_instants: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn respond(&self, now: Timestamp) -> Result<Vec<Subscription>, DomainError> {
            self.seen_instants.lock().unwrap().push(now);
            if self.fail {
                return Err(DomainError::database("Simulated read failure"));
            }
            Ok(self.rows.clone())
        }
    }

    #[async_trait]
    impl SubscriptionReader for MockSubscriptionReader {
        async fn find_active_by_user(
            &self,
            _user_id: &UserId,
            now: Timestamp,
        ) -> Result<Vec<Subscription>, DomainError> {
            self.respond(now)
        }

        async fn find_active_by_user_and_price(
            &self,
            _user_id: &UserId,
            _product_price_id: &ProductPriceId,
            now: Timestamp,
        ) -> Result<Vec<Subscription>, DomainError> {
            self.respond(now)
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    fn open(user_id: UserId, price_id: ProductPriceId) -> Subscription {
        Subscription::start(user_id, price_id, ts("2026-01-01T00:00:00Z"))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn is_active_treats_end_equal_to_now_as_ended() {
        let mut sub = open(UserId::new(), ProductPriceId::new());
        sub.terminate(ts("2026-02-01T00:00:00Z"));

        assert!(ActiveSubscriptionQuery::is_active(&sub, ts("2026-01-31T23:59:59Z")));
        assert!(!ActiveSubscriptionQuery::is_active(&sub, ts("2026-02-01T00:00:00Z")));
    }

    #[tokio::test]
    async fn pair_query_returns_none_when_nothing_is_active() {
        let query = ActiveSubscriptionQuery::new(Arc::new(MockSubscriptionReader::with_rows(vec![])));

        let found = query
            .find_active_for_user_and_price(&UserId::new(), &ProductPriceId::new(), ts("2026-02-16T00:00:00Z"))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn pair_query_returns_the_single_active_row() {
        let user_id = UserId::new();
        let price_id = ProductPriceId::new();
        let sub = open(user_id, price_id);
        let query = ActiveSubscriptionQuery::new(Arc::new(MockSubscriptionReader::with_rows(vec![sub.clone()])));

        let found = query
            .find_active_for_user_and_price(&user_id, &price_id, ts("2026-02-16T00:00:00Z"))
            .await
            .unwrap();

        assert_eq!(found, Some(sub));
    }

    #[tokio::test]
    async fn pair_query_reports_more_than_one_row_as_data_integrity() {
        let user_id = UserId::new();
        let price_id = ProductPriceId::new();
        let reader = MockSubscriptionReader::with_rows(vec![open(user_id, price_id), open(user_id, price_id)]);
        let query = ActiveSubscriptionQuery::new(Arc::new(reader));

        let err = query
            .find_active_for_user_and_price(&user_id, &price_id, ts("2026-02-16T00:00:00Z"))
            .await
            .unwrap_err();

        assert_eq!(err, SubscriptionError::data_integrity(user_id, price_id, 2));
        assert_eq!(err.code(), ErrorCode::DataIntegrity);
    }

    #[tokio::test]
    async fn queries_pass_the_given_instant_through() {
        let reader = Arc::new(MockSubscriptionReader::with_rows(vec![]));
        let query = ActiveSubscriptionQuery::new(reader.clone());
        let now = ts("2026-02-16T12:00:00Z");

        query.find_active_for_user(&UserId::new(), now).await.unwrap();
        query
            .find_active_for_user_and_price(&UserId::new(), &ProductPriceId::new(), now)
            .await
            .unwrap();

        assert_eq!(*reader.seen_instants.lock().unwrap(), vec![now, now]);
    }

    #[tokio::test]
    async fn read_failures_surface_as_infrastructure() {
        let query = ActiveSubscriptionQuery::new(Arc::new(MockSubscriptionReader::failing()));

        let err = query
            .find_active_for_user(&UserId::new(), ts("2026-02-16T00:00:00Z"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubscriptionError::Infrastructure(_)));
    }
}
