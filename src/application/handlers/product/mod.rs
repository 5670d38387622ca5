//! Product handlers.
//!
//! ## Commands
//! - Creating a product with optional initial prices
//! - Updating name or description
//! - Deleting a product along with its prices and their subscriptions
//!
//! ## Queries
//! - Get one product, list all; both include prices

mod create_product;
mod delete_product;
mod details;
mod get_product;
mod update_product;

pub use details::{NewPrice, ProductDetails};

// Commands
pub use create_product::{CreateProductCommand, CreateProductHandler, CreateProductResult};
pub use delete_product::{DeleteProductCommand, DeleteProductHandler};
pub use update_product::{UpdateProductCommand, UpdateProductHandler, UpdateProductResult};

// Queries
pub use get_product::{GetProductHandler, GetProductQuery, ListProductsHandler};
