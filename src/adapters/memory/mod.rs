//! In-memory adapters.
//!
//! Back the `memory` storage backend and the test suites. Uniqueness rules
//! match the PostgreSQL schema.

mod product_price_repository;
mod product_repository;
mod subscription_store;
mod user_repository;

pub use product_price_repository::InMemoryProductPriceRepository;
pub use product_repository::InMemoryProductRepository;
pub use subscription_store::InMemorySubscriptionStore;
pub use user_repository::InMemoryUserRepository;
