//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors)
//! - `catalog` - Users, products and product prices
//! - `subscription` - Subscription aggregate and termination date rules

pub mod catalog;
pub mod foundation;
pub mod subscription;
