//! In-memory ProductPriceRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::ProductPrice;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId, ProductPriceId};
use crate::ports::ProductPriceRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryProductPriceRepository {
    prices: Arc<RwLock<HashMap<ProductPriceId, ProductPrice>>>,
}

impl InMemoryProductPriceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::ProductPriceNotFound, "Product price not found")
}

#[async_trait]
impl ProductPriceRepository for InMemoryProductPriceRepository {
    async fn save(&self, price: &ProductPrice) -> Result<(), DomainError> {
        self.prices.write().await.insert(price.id, price.clone());
        Ok(())
    }

    async fn update(&self, price: &ProductPrice) -> Result<(), DomainError> {
        let mut prices = self.prices.write().await;
        match prices.get_mut(&price.id) {
            Some(stored) => {
                *stored = price.clone();
                Ok(())
            }
            None => Err(not_found()),
        }
    }

    async fn find_by_id(&self, id: &ProductPriceId) -> Result<Option<ProductPrice>, DomainError> {
        Ok(self.prices.read().await.get(id).cloned())
    }

    async fn find_by_id_and_product(
        &self,
        id: &ProductPriceId,
        product_id: &ProductId,
    ) -> Result<Option<ProductPrice>, DomainError> {
        Ok(self
            .prices
            .read()
            .await
            .get(id)
            .filter(|p| p.product_id == *product_id)
            .cloned())
    }

    async fn find_by_product(&self, product_id: &ProductId) -> Result<Vec<ProductPrice>, DomainError> {
        let mut prices: Vec<ProductPrice> = self
            .prices
            .read()
            .await
            .values()
            .filter(|p| p.product_id == *product_id)
            .cloned()
            .collect();
        prices.sort_by_key(|p| (p.period.as_str(), p.price));
        Ok(prices)
    }

    async fn delete(&self, id: &ProductPriceId) -> Result<(), DomainError> {
        self.prices
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(not_found)
    }
}
