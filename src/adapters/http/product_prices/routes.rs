//! Axum router configuration for product price endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_product_price, delete_product_price, get_product_price, list_product_prices,
    update_product_price,
};
use crate::adapters::http::state::AppState;

/// Create the product price router.
///
/// # Routes
/// - `GET /products/:product_id/prices` - List a product's prices
/// - `POST /products/:product_id/prices` - Add a price
/// - `GET /products/:product_id/prices/:id` - Get a price
/// - `PATCH /products/:product_id/prices/:id` - Update a price
/// - `DELETE /products/:product_id/prices/:id` - Delete a price and its subscriptions
pub fn product_price_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products/:product_id/prices",
            get(list_product_prices).post(create_product_price),
        )
        .route(
            "/products/:product_id/prices/:id",
            get(get_product_price)
                .patch(update_product_price)
                .delete(delete_product_price),
        )
}
