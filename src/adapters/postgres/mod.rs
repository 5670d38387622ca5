//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository`
//! - `PostgresProductRepository`
//! - `PostgresProductPriceRepository`
//! - `PostgresSubscriptionRepository` - write side
//! - `PostgresSubscriptionReader` - active subscription queries
//!
//! Schema lives in `migrations/` at the crate root.

mod pool;
mod product_price_repository;
mod product_repository;
mod subscription_reader;
mod subscription_repository;
mod user_repository;

pub use pool::{connect, run_migrations};
pub use product_price_repository::PostgresProductPriceRepository;
pub use product_repository::PostgresProductRepository;
pub use subscription_reader::PostgresSubscriptionReader;
pub use subscription_repository::PostgresSubscriptionRepository;
pub use user_repository::PostgresUserRepository;
