//! Product and product price records.

use serde::{Deserialize, Serialize};

use super::validation::{check_length, check_non_negative, check_not_blank, finish, MAX_TEXT_LENGTH};
use super::PricePeriod;
use crate::domain::foundation::{ProductId, ProductPriceId, ValidationError};

/// A sellable product. Prices live in their own records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Product {
    /// Creates a product. `description` must not be blank on creation.
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, Vec<ValidationError>> {
        let product = Self {
            id: ProductId::new(),
            name: name.into(),
            description: description.into(),
        };
        let mut errors = product.violations();
        check_not_blank("description", &product.description, &mut errors);
        finish(errors)?;
        Ok(product)
    }

    /// Applies the given changes and re-validates.
    ///
    /// On error the product is left untouched.
    pub fn apply(&mut self, changes: ProductChanges) -> Result<(), Vec<ValidationError>> {
        let mut updated = self.clone();
        if let Some(name) = changes.name {
            updated.name = name;
        }
        if let Some(description) = changes.description {
            updated.description = description;
        }
        finish(updated.violations())?;
        *self = updated;
        Ok(())
    }

    fn violations(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_length("name", &self.name, 1, MAX_TEXT_LENGTH, &mut errors);
        errors
    }
}

/// A price for a product: the plan a user subscribes to.
///
/// `price` is in minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPrice {
    pub id: ProductPriceId,
    pub product_id: ProductId,
    pub period: PricePeriod,
    pub price: i64,
}

/// Partial update for a product price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPriceChanges {
    pub price: Option<i64>,
    pub period: Option<PricePeriod>,
}

impl ProductPrice {
    /// Creates a price owned by `product_id`.
    pub fn create(
        product_id: ProductId,
        period: PricePeriod,
        price: i64,
    ) -> Result<Self, Vec<ValidationError>> {
        let product_price = Self {
            id: ProductPriceId::new(),
            product_id,
            period,
            price,
        };
        finish(product_price.violations())?;
        Ok(product_price)
    }

    /// Applies the given changes and re-validates.
    ///
    /// Changing the period affects only future terminations; existing
    /// end dates are never recomputed.
    pub fn apply(&mut self, changes: ProductPriceChanges) -> Result<(), Vec<ValidationError>> {
        let mut updated = self.clone();
        if let Some(price) = changes.price {
            updated.price = price;
        }
        if let Some(period) = changes.period {
            updated.period = period;
        }
        finish(updated.violations())?;
        *self = updated;
        Ok(())
    }

    fn violations(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_non_negative("price", self.price, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_requires_name_and_description() {
        let errors = Product::create("", "   ").unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "description"]);
    }

    #[test]
    fn product_name_is_capped_at_255_characters() {
        let long_name = "x".repeat(256);
        assert!(Product::create(long_name, "desc").is_err());
        assert!(Product::create("x".repeat(255), "desc").is_ok());
    }

    #[test]
    fn product_update_may_clear_description() {
        let mut product = Product::create("Streaming", "Video on demand").unwrap();
        product
            .apply(ProductChanges {
                name: None,
                description: Some(String::new()),
            })
            .unwrap();
        assert_eq!(product.description, "");
    }

    #[test]
    fn product_update_rejects_empty_name() {
        let mut product = Product::create("Streaming", "Video on demand").unwrap();
        let result = product.apply(ProductChanges {
            name: Some(String::new()),
            description: None,
        });
        assert!(result.is_err());
        assert_eq!(product.name, "Streaming");
    }

    #[test]
    fn price_must_not_be_negative() {
        let product_id = ProductId::new();
        assert!(ProductPrice::create(product_id, PricePeriod::Monthly, -1).is_err());
        assert!(ProductPrice::create(product_id, PricePeriod::Monthly, 0).is_ok());
    }

    #[test]
    fn price_update_changes_only_given_fields() {
        let mut price = ProductPrice::create(ProductId::new(), PricePeriod::Monthly, 999).unwrap();
        price
            .apply(ProductPriceChanges {
                price: None,
                period: Some(PricePeriod::Yearly),
            })
            .unwrap();

        assert_eq!(price.price, 999);
        assert_eq!(price.period, PricePeriod::Yearly);
    }
}
