//! HTTP adapter for subscription endpoints.
//!
//! - `GET /api/users/:user_id/subscriptions` - List active subscriptions
//! - `POST /api/users/:user_id/subscriptions` - Subscribe to a product price
//! - `GET /api/users/:user_id/subscriptions/:id` - Get one subscription
//! - `DELETE /api/users/:user_id/subscriptions/:id` - Terminate at the end of the billing cycle

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::subscription_routes;
