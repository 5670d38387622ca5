//! HTTP adapter for product endpoints.
//!
//! - `GET /api/products` - List products with their prices
//! - `POST /api/products` - Create a product, optionally with prices
//! - `GET /api/products/:product_id` - Get a product
//! - `PATCH /api/products/:product_id` - Update name or description
//! - `DELETE /api/products/:product_id` - Delete a product, its prices and their subscriptions

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::product_routes;
