//! HTTP adapter for product price endpoints.
//!
//! Prices are always addressed through their product:
//! - `GET /api/products/:product_id/prices`
//! - `POST /api/products/:product_id/prices`
//! - `GET /api/products/:product_id/prices/:id`
//! - `PATCH /api/products/:product_id/prices/:id`
//! - `DELETE /api/products/:product_id/prices/:id` - also deletes its subscriptions

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::product_price_routes;
