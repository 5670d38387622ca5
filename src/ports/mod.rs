//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! ## Catalog Ports
//!
//! - `UserRepository`
//! - `ProductRepository`
//! - `ProductPriceRepository`
//!
//! ## Subscription Ports
//!
//! - `SubscriptionRepository` - write side
//! - `SubscriptionReader` - active subscription queries
//!
//! ## Time
//!
//! - `Clock`

mod clock;
mod product_price_repository;
mod product_repository;
mod subscription_reader;
mod subscription_repository;
mod user_repository;

pub use clock::Clock;
pub use product_price_repository::ProductPriceRepository;
pub use product_repository::ProductRepository;
pub use subscription_reader::SubscriptionReader;
pub use subscription_repository::SubscriptionRepository;
pub use user_repository::UserRepository;
