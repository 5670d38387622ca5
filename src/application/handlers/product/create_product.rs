//! CreateProductHandler - Command handler for adding a product and its initial prices.

use std::sync::Arc;

use super::details::{NewPrice, ProductDetails};
use crate::domain::catalog::{CatalogError, Product, ProductPrice};
use crate::ports::{ProductPriceRepository, ProductRepository};

/// Command to create a product, optionally with prices.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: String,
    pub prices: Vec<NewPrice>,
}

#[derive(Debug, Clone)]
pub struct CreateProductResult {
    pub product: ProductDetails,
}

/// Validates the product and every price before writing anything.
pub struct CreateProductHandler {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn ProductPriceRepository>,
}

impl CreateProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>, prices: Arc<dyn ProductPriceRepository>) -> Self {
        Self { products, prices }
    }

    pub async fn handle(&self, cmd: CreateProductCommand) -> Result<CreateProductResult, CatalogError> {
        let mut errors = Vec::new();
        let product = match Product::create(cmd.name, cmd.description) {
            Ok(product) => Some(product),
            Err(e) => {
                errors.extend(e);
                None
            }
        };

        let product_id = product.as_ref().map(|p| p.id).unwrap_or_default();
        let mut prices = Vec::with_capacity(cmd.prices.len());
        for new_price in cmd.prices {
            match ProductPrice::create(product_id, new_price.period, new_price.price) {
                Ok(price) => prices.push(price),
                Err(e) => errors.extend(e),
            }
        }

        let product = match product {
            Some(product) if errors.is_empty() => product,
            _ => return Err(CatalogError::validation(errors)),
        };

        self.products.save(&product).await?;
        for price in &prices {
            self.prices.save(price).await?;
        }

        tracing::info!(product_id = %product.id, prices = prices.len(), "Product created");
        Ok(CreateProductResult {
            product: ProductDetails { product, prices },
        })
    }
}
