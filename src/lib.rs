//! Subscription Billing - product catalog with subscription lifecycle.
//!
//! Users subscribe to product prices. Cancelling a subscription keeps it
//! active until the end of its current billing cycle, computed with
//! calendar-correct monthly and yearly arithmetic.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
