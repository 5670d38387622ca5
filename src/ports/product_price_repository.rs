//! Product price repository port.

use crate::domain::catalog::ProductPrice;
use crate::domain::foundation::{DomainError, ProductId, ProductPriceId};
use async_trait::async_trait;

/// Repository port for product price persistence.
#[async_trait]
pub trait ProductPriceRepository: Send + Sync {
    /// Save a new price.
    async fn save(&self, price: &ProductPrice) -> Result<(), DomainError>;

    /// Update an existing price.
    ///
    /// # Errors
    ///
    /// - `ProductPriceNotFound` if the price doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, price: &ProductPrice) -> Result<(), DomainError>;

    /// Find a price by id, regardless of product.
    async fn find_by_id(&self, id: &ProductPriceId) -> Result<Option<ProductPrice>, DomainError>;

    /// Find a price by id, only if it belongs to `product_id`.
    async fn find_by_id_and_product(
        &self,
        id: &ProductPriceId,
        product_id: &ProductId,
    ) -> Result<Option<ProductPrice>, DomainError>;

    /// All prices of a product.
    async fn find_by_product(&self, product_id: &ProductId) -> Result<Vec<ProductPrice>, DomainError>;

    /// Delete a price.
    ///
    /// # Errors
    ///
    /// - `ProductPriceNotFound` if the price doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ProductPriceId) -> Result<(), DomainError>;
}
