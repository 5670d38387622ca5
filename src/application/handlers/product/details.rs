//! Product paired with its prices.

use crate::domain::catalog::{PricePeriod, Product, ProductPrice};

/// A product with every price it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub product: Product,
    pub prices: Vec<ProductPrice>,
}

/// Price to create together with a new product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPrice {
    pub period: PricePeriod,
    pub price: i64,
}
