//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod product;
pub mod product_price;
pub mod subscription;
pub mod user;
