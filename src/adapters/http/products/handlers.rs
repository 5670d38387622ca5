//! HTTP handlers for product endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::adapters::http::error::{parse_path_id, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::handlers::product::{
    CreateProductCommand, DeleteProductCommand, GetProductQuery, UpdateProductCommand,
};
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{ErrorCode, ProductId};

pub(crate) fn product_id_from_path(raw: &str) -> Result<ProductId, ApiError> {
    parse_path_id(raw, ErrorCode::ProductNotFound, "Product")
}

/// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = state.list_products_handler().handle().await?;
    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(body))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = Vec::new();
    let mut prices = Vec::with_capacity(req.prices.len());
    for price in req.prices {
        match price.into_new_price() {
            Ok(price) => prices.push(price),
            Err(e) => errors.extend(e),
        }
    }
    if !errors.is_empty() {
        return Err(CatalogError::validation(errors).into());
    }

    let cmd = CreateProductCommand {
        name: req.name,
        description: req.description,
        prices,
    };
    let result = state.create_product_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(result.product))))
}

/// GET /api/products/:product_id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetProductQuery {
        product_id: product_id_from_path(&id)?,
    };
    let product = state.get_product_handler().handle(query).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// PATCH /api/products/:product_id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateProductCommand {
        product_id: product_id_from_path(&id)?,
        changes: req.into(),
    };
    let result = state.update_product_handler().handle(cmd).await?;
    Ok(Json(ProductResponse::from(result.product)))
}

/// DELETE /api/products/:product_id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteProductCommand {
        product_id: product_id_from_path(&id)?,
    };
    state.delete_product_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
