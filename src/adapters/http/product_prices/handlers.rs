//! HTTP handlers for product price endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{CreateProductPriceRequest, ProductPriceResponse, UpdateProductPriceRequest};
use crate::adapters::http::error::{parse_path_id, ApiError};
use crate::adapters::http::products::handlers::product_id_from_path;
use crate::adapters::http::state::AppState;
use crate::application::handlers::product_price::{
    CreateProductPriceCommand, DeleteProductPriceCommand, GetProductPriceQuery,
    ListProductPricesQuery, UpdateProductPriceCommand,
};
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{ErrorCode, ProductPriceId};

pub(crate) fn product_price_id_from_path(raw: &str) -> Result<ProductPriceId, ApiError> {
    parse_path_id(raw, ErrorCode::ProductPriceNotFound, "Product price")
}

/// GET /api/products/:product_id/prices
pub async fn list_product_prices(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListProductPricesQuery {
        product_id: product_id_from_path(&product_id)?,
    };
    let prices = state.list_product_prices_handler().handle(query).await?;
    let body: Vec<ProductPriceResponse> =
        prices.into_iter().map(ProductPriceResponse::from).collect();
    Ok(Json(body))
}

/// POST /api/products/:product_id/prices
pub async fn create_product_price(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(req): Json<CreateProductPriceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = product_id_from_path(&product_id)?;
    let new_price = req.into_new_price().map_err(CatalogError::validation)?;
    let cmd = CreateProductPriceCommand {
        product_id,
        period: new_price.period,
        price: new_price.price,
    };
    let result = state.create_product_price_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(ProductPriceResponse::from(result.price))))
}

/// GET /api/products/:product_id/prices/:id
pub async fn get_product_price(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetProductPriceQuery {
        product_id: product_id_from_path(&product_id)?,
        product_price_id: product_price_id_from_path(&id)?,
    };
    let price = state.get_product_price_handler().handle(query).await?;
    Ok(Json(ProductPriceResponse::from(price)))
}

/// PATCH /api/products/:product_id/prices/:id
pub async fn update_product_price(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(String, String)>,
    Json(req): Json<UpdateProductPriceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = product_id_from_path(&product_id)?;
    let product_price_id = product_price_id_from_path(&id)?;
    let changes = req.into_changes().map_err(CatalogError::validation)?;
    let cmd = UpdateProductPriceCommand {
        product_id,
        product_price_id,
        changes,
    };
    let result = state.update_product_price_handler().handle(cmd).await?;
    Ok(Json(ProductPriceResponse::from(result.price)))
}

/// DELETE /api/products/:product_id/prices/:id
pub async fn delete_product_price(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteProductPriceCommand {
        product_id: product_id_from_path(&product_id)?,
        product_price_id: product_price_id_from_path(&id)?,
    };
    state.delete_product_price_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
