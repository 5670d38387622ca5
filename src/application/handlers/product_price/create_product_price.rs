//! CreateProductPriceHandler - Command handler for adding a price to a product.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, PricePeriod, ProductPrice};
use crate::domain::foundation::ProductId;
use crate::ports::{ProductPriceRepository, ProductRepository};

#[derive(Debug, Clone)]
pub struct CreateProductPriceCommand {
    pub product_id: ProductId,
    pub period: PricePeriod,
    pub price: i64,
}

#[derive(Debug, Clone)]
pub struct CreateProductPriceResult {
    pub price: ProductPrice,
}

pub struct CreateProductPriceHandler {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn ProductPriceRepository>,
}

impl CreateProductPriceHandler {
    pub fn new(products: Arc<dyn ProductRepository>, prices: Arc<dyn ProductPriceRepository>) -> Self {
        Self { products, prices }
    }

    pub async fn handle(
        &self,
        cmd: CreateProductPriceCommand,
    ) -> Result<CreateProductPriceResult, CatalogError> {
        if self.products.find_by_id(&cmd.product_id).await?.is_none() {
            return Err(CatalogError::product_not_found(cmd.product_id));
        }

        let price = ProductPrice::create(cmd.product_id, cmd.period, cmd.price)?;
        self.prices.save(&price).await?;

        tracing::info!(
            product_id = %price.product_id,
            product_price_id = %price.id,
            period = %price.period,
            "Product price created"
        );
        Ok(CreateProductPriceResult { price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProductPriceRepository, InMemoryProductRepository};
    use crate::domain::catalog::Product;

    #[tokio::test]
    async fn adds_price_to_existing_product() {
        let products = Arc::new(InMemoryProductRepository::new());
        let prices = Arc::new(InMemoryProductPriceRepository::new());
        let product = Product::create("Streaming", "Video").unwrap();
        products.save(&product).await.unwrap();

        let result = CreateProductPriceHandler::new(products, prices.clone())
            .handle(CreateProductPriceCommand {
                product_id: product.id,
                period: PricePeriod::Yearly,
                price: 9900,
            })
            .await
            .unwrap();

        assert_eq!(prices.find_by_product(&product.id).await.unwrap(), vec![result.price]);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let product_id = ProductId::new();
        let err = CreateProductPriceHandler::new(
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryProductPriceRepository::new()),
        )
        .handle(CreateProductPriceCommand {
            product_id,
            period: PricePeriod::Monthly,
            price: 100,
        })
        .await
        .unwrap_err();

        assert_eq!(err, CatalogError::product_not_found(product_id));
    }
}
