//! Subscription-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | UserNotFound | 404 |
//! | ProductPriceNotFound | 404 |
//! | AlreadySubscribed | 409 |
//! | AlreadyEnded | 409 |
//! | DataIntegrity | 500 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{
    DomainError, ErrorCode, ProductPriceId, SubscriptionId, Timestamp, UserId,
};

/// Subscription-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// No subscription with this id belongs to the user.
    NotFound(SubscriptionId),

    /// The subscribing user does not exist.
    UserNotFound(UserId),

    /// The product price being subscribed to does not exist.
    ProductPriceNotFound(ProductPriceId),

    /// The user already has an active subscription to this price.
    AlreadySubscribed {
        user_id: UserId,
        product_price_id: ProductPriceId,
    },

    /// The subscription's end date has already passed.
    AlreadyEnded {
        id: SubscriptionId,
        end_date: Timestamp,
    },

    /// Storage holds more than one active subscription for a pair.
    DataIntegrity {
        user_id: UserId,
        product_price_id: ProductPriceId,
        count: usize,
    },

    /// Infrastructure error.
    Infrastructure(String),
}

impl SubscriptionError {
    pub fn not_found(id: SubscriptionId) -> Self {
        SubscriptionError::NotFound(id)
    }

    pub fn user_not_found(user_id: UserId) -> Self {
        SubscriptionError::UserNotFound(user_id)
    }

    pub fn product_price_not_found(id: ProductPriceId) -> Self {
        SubscriptionError::ProductPriceNotFound(id)
    }

    pub fn already_subscribed(user_id: UserId, product_price_id: ProductPriceId) -> Self {
        SubscriptionError::AlreadySubscribed {
            user_id,
            product_price_id,
        }
    }

    pub fn already_ended(id: SubscriptionId, end_date: Timestamp) -> Self {
        SubscriptionError::AlreadyEnded { id, end_date }
    }

    pub fn data_integrity(user_id: UserId, product_price_id: ProductPriceId, count: usize) -> Self {
        SubscriptionError::DataIntegrity {
            user_id,
            product_price_id,
            count,
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SubscriptionError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::NotFound(_) => ErrorCode::SubscriptionNotFound,
            SubscriptionError::UserNotFound(_) => ErrorCode::UserNotFound,
            SubscriptionError::ProductPriceNotFound(_) => ErrorCode::ProductPriceNotFound,
            SubscriptionError::AlreadySubscribed { .. } => ErrorCode::AlreadySubscribed,
            SubscriptionError::AlreadyEnded { .. } => ErrorCode::SubscriptionEnded,
            SubscriptionError::DataIntegrity { .. } => ErrorCode::DataIntegrity,
            SubscriptionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            SubscriptionError::NotFound(id) => format!("Subscription not found: {}", id),
            SubscriptionError::UserNotFound(id) => format!("User not found: {}", id),
            SubscriptionError::ProductPriceNotFound(id) => {
                format!("Product price not found: {}", id)
            }
            SubscriptionError::AlreadySubscribed { .. } => {
                "User is already subscribed to this product price".to_string()
            }
            SubscriptionError::AlreadyEnded { id, end_date } => format!(
                "Subscription {} already ended at {}",
                id,
                end_date.to_rfc3339()
            ),
            SubscriptionError::DataIntegrity {
                user_id,
                product_price_id,
                count,
            } => format!(
                "Found {} active subscriptions for user {} and product price {}",
                count, user_id, product_price_id
            ),
            SubscriptionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        SubscriptionError::Infrastructure(err.to_string())
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            SubscriptionError::AlreadySubscribed {
                user_id,
                product_price_id,
            } => domain
                .with_detail("userId", user_id.to_string())
                .with_detail("productPriceId", product_price_id.to_string()),
            _ => domain,
        }
    }
}
