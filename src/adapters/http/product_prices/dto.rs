//! Request and response bodies for product price endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::product::NewPrice;
use crate::domain::catalog::{PricePeriod, ProductPrice, ProductPriceChanges};
use crate::domain::foundation::{ProductId, ProductPriceId, ValidationError};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for creating a price, alone or nested in a product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProductPriceRequest {
    pub price: Option<i64>,
    pub price_period: Option<String>,
}

impl CreateProductPriceRequest {
    /// Checks presence and parses the period; range checks stay in the domain.
    pub fn into_new_price(self) -> Result<NewPrice, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let period = match self.price_period.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(ValidationError::empty_field("pricePeriod"));
                None
            }
            Some(raw) => match raw.parse::<PricePeriod>() {
                Ok(period) => Some(period),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
        };
        if self.price.is_none() {
            errors.push(ValidationError::empty_field("price"));
        }

        match (period, self.price) {
            (Some(period), Some(price)) if errors.is_empty() => Ok(NewPrice { period, price }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductPriceRequest {
    pub price: Option<i64>,
    pub price_period: Option<String>,
}

impl UpdateProductPriceRequest {
    pub fn into_changes(self) -> Result<ProductPriceChanges, Vec<ValidationError>> {
        let period = match self.price_period.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<PricePeriod>().map_err(|e| vec![e])?),
        };
        Ok(ProductPriceChanges {
            price: self.price,
            period,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceResponse {
    pub id: ProductPriceId,
    pub product_id: ProductId,
    pub price_period: PricePeriod,
    pub price: i64,
}

impl From<ProductPrice> for ProductPriceResponse {
    fn from(price: ProductPrice) -> Self {
        Self {
            id: price.id,
            product_id: price.product_id,
            price_period: price.period,
            price: price.price,
        }
    }
}
