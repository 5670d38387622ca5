//! Axum router configuration for product endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_product, delete_product, get_product, list_products, update_product};
use crate::adapters::http::state::AppState;

/// Create the product router.
///
/// # Routes
/// - `GET /products` - List products
/// - `POST /products` - Create a product
/// - `GET /products/:product_id` - Get a product
/// - `PATCH /products/:product_id` - Update a product
/// - `DELETE /products/:product_id` - Delete a product
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:product_id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}
