//! Product repository port.

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};
use async_trait::async_trait;

/// Repository port for product persistence.
///
/// Deleting a product does not touch its prices; callers remove those
/// first through [`ProductPriceRepository`](super::ProductPriceRepository).
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Save a new product.
    ///
    /// # Errors
    ///
    /// - `DuplicateProductName` if the name is taken (detail `value` holds it)
    /// - `DatabaseError` on persistence failure
    async fn save(&self, product: &Product) -> Result<(), DomainError>;

    /// Update an existing product.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the product doesn't exist
    /// - `DuplicateProductName` if the new name is taken
    /// - `DatabaseError` on persistence failure
    async fn update(&self, product: &Product) -> Result<(), DomainError>;

    /// Find a product by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// List every product.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the product doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ProductId) -> Result<(), DomainError>;
}
