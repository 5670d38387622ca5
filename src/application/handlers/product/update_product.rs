//! UpdateProductHandler - Command handler for partial product updates.

use std::sync::Arc;

use super::details::ProductDetails;
use crate::domain::catalog::{CatalogError, ProductChanges};
use crate::domain::foundation::ProductId;
use crate::ports::{ProductPriceRepository, ProductRepository};

#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub product_id: ProductId,
    pub changes: ProductChanges,
}

#[derive(Debug, Clone)]
pub struct UpdateProductResult {
    pub product: ProductDetails,
}

pub struct UpdateProductHandler {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn ProductPriceRepository>,
}

impl UpdateProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>, prices: Arc<dyn ProductPriceRepository>) -> Self {
        Self { products, prices }
    }

    pub async fn handle(&self, cmd: UpdateProductCommand) -> Result<UpdateProductResult, CatalogError> {
        let mut product = self
            .products
            .find_by_id(&cmd.product_id)
            .await?
            .ok_or_else(|| CatalogError::product_not_found(cmd.product_id))?;

        product.apply(cmd.changes)?;
        self.products.update(&product).await?;
        let prices = self.prices.find_by_product(&product.id).await?;

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(UpdateProductResult {
            product: ProductDetails { product, prices },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProductPriceRepository, InMemoryProductRepository};
    use crate::domain::catalog::Product;

    #[tokio::test]
    async fn renames_product() {
        let products = Arc::new(InMemoryProductRepository::new());
        let product = Product::create("Streaming", "Video").unwrap();
        products.save(&product).await.unwrap();
        let handler =
            UpdateProductHandler::new(products.clone(), Arc::new(InMemoryProductPriceRepository::new()));

        let result = handler
            .handle(UpdateProductCommand {
                product_id: product.id,
                changes: ProductChanges {
                    name: Some("Streaming Plus".to_string()),
                    description: None,
                },
            })
            .await
            .unwrap();

        assert_eq!(result.product.product.name, "Streaming Plus");
        assert_eq!(result.product.product.description, "Video");
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let handler = UpdateProductHandler::new(
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryProductPriceRepository::new()),
        );
        let product_id = ProductId::new();

        let err = handler
            .handle(UpdateProductCommand {
                product_id,
                changes: ProductChanges::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::product_not_found(product_id));
    }
}
