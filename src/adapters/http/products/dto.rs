//! Request and response bodies for product endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::product_prices::{CreateProductPriceRequest, ProductPriceResponse};
use crate::application::handlers::product::ProductDetails;
use crate::domain::catalog::ProductChanges;
use crate::domain::foundation::ProductId;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub prices: Vec<CreateProductPriceRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(req: UpdateProductRequest) -> Self {
        ProductChanges {
            name: req.name,
            description: req.description,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub prices: Vec<ProductPriceResponse>,
}

impl From<ProductDetails> for ProductResponse {
    fn from(details: ProductDetails) -> Self {
        Self {
            id: details.product.id,
            name: details.product.name,
            description: details.product.description,
            prices: details
                .prices
                .into_iter()
                .map(ProductPriceResponse::from)
                .collect(),
        }
    }
}
