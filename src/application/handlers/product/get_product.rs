//! Product query handlers.

use std::sync::Arc;

use super::details::ProductDetails;
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::ProductId;
use crate::ports::{ProductPriceRepository, ProductRepository};

#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub product_id: ProductId,
}

pub struct GetProductHandler {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn ProductPriceRepository>,
}

impl GetProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>, prices: Arc<dyn ProductPriceRepository>) -> Self {
        Self { products, prices }
    }

    pub async fn handle(&self, query: GetProductQuery) -> Result<ProductDetails, CatalogError> {
        let product = self
            .products
            .find_by_id(&query.product_id)
            .await?
            .ok_or_else(|| CatalogError::product_not_found(query.product_id))?;
        let prices = self.prices.find_by_product(&product.id).await?;

        Ok(ProductDetails { product, prices })
    }
}

/// Lists every product with its prices.
pub struct ListProductsHandler {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn ProductPriceRepository>,
}

impl ListProductsHandler {
    pub fn new(products: Arc<dyn ProductRepository>, prices: Arc<dyn ProductPriceRepository>) -> Self {
        Self { products, prices }
    }

    pub async fn handle(&self) -> Result<Vec<ProductDetails>, CatalogError> {
        let products = self.products.list().await?;
        let mut details = Vec::with_capacity(products.len());
        for product in products {
            let prices = self.prices.find_by_product(&product.id).await?;
            details.push(ProductDetails { product, prices });
        }
        Ok(details)
    }
}
