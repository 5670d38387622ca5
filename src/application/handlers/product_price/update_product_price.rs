//! UpdateProductPriceHandler - Command handler for partial price updates.
//!
//! Existing subscriptions keep their end dates; a new period applies to
//! terminations computed afterwards.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, ProductPrice, ProductPriceChanges};
use crate::domain::foundation::{ProductId, ProductPriceId};
use crate::ports::ProductPriceRepository;

#[derive(Debug, Clone)]
pub struct UpdateProductPriceCommand {
    pub product_id: ProductId,
    pub product_price_id: ProductPriceId,
    pub changes: ProductPriceChanges,
}

#[derive(Debug, Clone)]
pub struct UpdateProductPriceResult {
    pub price: ProductPrice,
}

pub struct UpdateProductPriceHandler {
    prices: Arc<dyn ProductPriceRepository>,
}

impl UpdateProductPriceHandler {
    pub fn new(prices: Arc<dyn ProductPriceRepository>) -> Self {
        Self { prices }
    }

    pub async fn handle(
        &self,
        cmd: UpdateProductPriceCommand,
    ) -> Result<UpdateProductPriceResult, CatalogError> {
        let mut price = self
            .prices
            .find_by_id_and_product(&cmd.product_price_id, &cmd.product_id)
            .await?
            .ok_or_else(|| CatalogError::product_price_not_found(cmd.product_price_id))?;

        price.apply(cmd.changes)?;
        self.prices.update(&price).await?;

        tracing::info!(product_price_id = %price.id, "Product price updated");
        Ok(UpdateProductPriceResult { price })
    }
}
