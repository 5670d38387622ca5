//! HTTP adapter for user endpoints.
//!
//! - `GET /api/users` - List users
//! - `POST /api/users` - Create a user
//! - `GET /api/users/:user_id` - Get a user
//! - `PATCH /api/users/:user_id` - Update a user

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::user_routes;
