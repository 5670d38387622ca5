//! Axum router configuration for subscription endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_subscription, list_active_subscriptions, subscribe, unsubscribe};
use crate::adapters::http::state::AppState;

/// Create the subscription router.
///
/// # Routes
/// - `GET /users/:user_id/subscriptions` - Active subscriptions
/// - `POST /users/:user_id/subscriptions` - Subscribe
/// - `GET /users/:user_id/subscriptions/:id` - Get a subscription
/// - `DELETE /users/:user_id/subscriptions/:id` - Unsubscribe
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:user_id/subscriptions",
            get(list_active_subscriptions).post(subscribe),
        )
        .route(
            "/users/:user_id/subscriptions/:id",
            get(get_subscription).delete(unsubscribe),
        )
}
