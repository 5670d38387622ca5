//! Subscription paired with the product price it is for.

use crate::domain::catalog::ProductPrice;
use crate::domain::foundation::UserId;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{ProductPriceRepository, UserRepository};

/// A subscription with its product price, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionDetails {
    pub subscription: Subscription,
    pub product_price: ProductPrice,
}

/// Loads the price a stored subscription points at.
pub(super) async fn with_product_price(
    prices: &dyn ProductPriceRepository,
    subscription: Subscription,
) -> Result<SubscriptionDetails, SubscriptionError> {
    let product_price = prices
        .find_by_id(&subscription.product_price_id())
        .await?
        .ok_or_else(|| {
            SubscriptionError::infrastructure(format!(
                "Subscription {} references missing product price {}",
                subscription.id(),
                subscription.product_price_id()
            ))
        })?;

    Ok(SubscriptionDetails {
        subscription,
        product_price,
    })
}

pub(super) async fn require_user(
    users: &dyn UserRepository,
    user_id: &UserId,
) -> Result<(), SubscriptionError> {
    match users.find_by_id(user_id).await? {
        Some(_) => Ok(()),
        None => Err(SubscriptionError::user_not_found(*user_id)),
    }
}
