//! Axum router configuration for user endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_user, get_user, list_users, update_user};
use crate::adapters::http::state::AppState;

/// Create the user router.
///
/// # Routes
/// - `GET /users` - List users
/// - `POST /users` - Create a user
/// - `GET /users/:user_id` - Get a user
/// - `PATCH /users/:user_id` - Update a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:user_id", get(get_user).patch(update_user))
}
