//! In-memory ProductRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::ProductRepository;

/// In-memory product store. Name uniqueness is checked under the write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_name(name: &str) -> DomainError {
    DomainError::new(ErrorCode::DuplicateProductName, "Product name is already in use")
        .with_detail("value", name)
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::ProductNotFound, "Product not found")
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> Result<(), DomainError> {
        let mut products = self.products.write().await;
        if products.values().any(|p| p.name == product.name) {
            return Err(duplicate_name(&product.name));
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let mut products = self.products.write().await;
        if !products.contains_key(&product.id) {
            return Err(not_found());
        }
        if products
            .values()
            .any(|p| p.id != product.id && p.name == product.name)
        {
            return Err(duplicate_name(&product.name));
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        self.products
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(not_found)
    }
}
