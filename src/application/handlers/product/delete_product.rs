//! DeleteProductHandler - Command handler for removing a product.
//!
//! Removal cascades explicitly: each price's subscriptions, then each
//! price, then the product. Steps are separate writes with no enclosing
//! transaction.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::ProductId;
use crate::ports::{ProductPriceRepository, ProductRepository, SubscriptionRepository};

#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub product_id: ProductId,
}

pub struct DeleteProductHandler {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn ProductPriceRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl DeleteProductHandler {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        prices: Arc<dyn ProductPriceRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            products,
            prices,
            subscriptions,
        }
    }

    pub async fn handle(&self, cmd: DeleteProductCommand) -> Result<(), CatalogError> {
        if self.products.find_by_id(&cmd.product_id).await?.is_none() {
            return Err(CatalogError::product_not_found(cmd.product_id));
        }

        let mut removed_subscriptions = 0;
        let prices = self.prices.find_by_product(&cmd.product_id).await?;
        for price in &prices {
            removed_subscriptions += self.subscriptions.delete_by_product_price(&price.id).await?;
            self.prices.delete(&price.id).await?;
        }
        self.products.delete(&cmd.product_id).await?;

        tracing::info!(
            product_id = %cmd.product_id,
            prices = prices.len(),
            subscriptions = removed_subscriptions,
            "Product deleted"
        );
        Ok(())
    }
}
