//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `clock` - System and test clocks
//! - `http` - REST API (axum)
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories (sqlx)

pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SteppedClock, SystemClock};
