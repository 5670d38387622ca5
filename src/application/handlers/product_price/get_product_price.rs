//! Product price query handlers.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, ProductPrice};
use crate::domain::foundation::{ProductId, ProductPriceId};
use crate::ports::{ProductPriceRepository, ProductRepository};

#[derive(Debug, Clone)]
pub struct GetProductPriceQuery {
    pub product_id: ProductId,
    pub product_price_id: ProductPriceId,
}

pub struct GetProductPriceHandler {
    prices: Arc<dyn ProductPriceRepository>,
}

impl GetProductPriceHandler {
    pub fn new(prices: Arc<dyn ProductPriceRepository>) -> Self {
        Self { prices }
    }

    pub async fn handle(&self, query: GetProductPriceQuery) -> Result<ProductPrice, CatalogError> {
        self.prices
            .find_by_id_and_product(&query.product_price_id, &query.product_id)
            .await?
            .ok_or_else(|| CatalogError::product_price_not_found(query.product_price_id))
    }
}

#[derive(Debug, Clone)]
pub struct ListProductPricesQuery {
    pub product_id: ProductId,
}

/// Lists the prices of one product; the product must exist.
pub struct ListProductPricesHandler {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn ProductPriceRepository>,
}

impl ListProductPricesHandler {
    pub fn new(products: Arc<dyn ProductRepository>, prices: Arc<dyn ProductPriceRepository>) -> Self {
        Self { products, prices }
    }

    pub async fn handle(&self, query: ListProductPricesQuery) -> Result<Vec<ProductPrice>, CatalogError> {
        if self.products.find_by_id(&query.product_id).await?.is_none() {
            return Err(CatalogError::product_not_found(query.product_id));
        }
        Ok(self.prices.find_by_product(&query.product_id).await?)
    }
}
