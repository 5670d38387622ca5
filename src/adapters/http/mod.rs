//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own adapter module with DTOs, handlers and routes.
//! Everything is mounted under `/api`.

pub mod error;
pub mod middleware;
pub mod product_prices;
pub mod products;
pub mod state;
pub mod subscriptions;
pub mod users;

use axum::Router;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// All resource routes, unmounted.
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .merge(users::user_routes())
        .merge(subscriptions::subscription_routes())
        .merge(products::product_routes())
        .merge(product_prices::product_price_routes())
}

/// The complete API router with state applied.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", resource_routes())
        .with_state(state)
}
