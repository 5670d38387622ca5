//! Subscription domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Subscription aggregate
//! - `billing_date` - termination date calculator
//! - `errors` - SubscriptionError

mod aggregate;
mod billing_date;

pub mod errors;

pub use aggregate::Subscription;
pub use billing_date::{compute_end_date, days_in_month, is_leap_year};
pub use errors::SubscriptionError;
