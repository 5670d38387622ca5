//! Catalog domain module.
//!
//! Users, products and product prices. A product price is the plan a user
//! subscribes to; its `PricePeriod` drives termination dates.

mod price_period;
mod product;
mod user;
mod validation;

pub mod errors;

pub use errors::CatalogError;
pub use price_period::PricePeriod;
pub use product::{Product, ProductChanges, ProductPrice, ProductPriceChanges};
pub use user::{User, UserChanges};
pub use validation::MAX_TEXT_LENGTH;
