//! DeleteProductPriceHandler - Command handler for removing a price.
//!
//! The price's subscriptions are deleted first, then the price.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{ProductId, ProductPriceId};
use crate::ports::{ProductPriceRepository, SubscriptionRepository};

#[derive(Debug, Clone)]
pub struct DeleteProductPriceCommand {
    pub product_id: ProductId,
    pub product_price_id: ProductPriceId,
}

pub struct DeleteProductPriceHandler {
    prices: Arc<dyn ProductPriceRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl DeleteProductPriceHandler {
    pub fn new(
        prices: Arc<dyn ProductPriceRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            prices,
            subscriptions,
        }
    }

    pub async fn handle(&self, cmd: DeleteProductPriceCommand) -> Result<(), CatalogError> {
        let price = self
            .prices
            .find_by_id_and_product(&cmd.product_price_id, &cmd.product_id)
            .await?
            .ok_or_else(|| CatalogError::product_price_not_found(cmd.product_price_id))?;

        let removed = self.subscriptions.delete_by_product_price(&price.id).await?;
        self.prices.delete(&price.id).await?;

        tracing::info!(
            product_price_id = %price.id,
            subscriptions = removed,
            "Product price deleted"
        );
        Ok(())
    }
}
