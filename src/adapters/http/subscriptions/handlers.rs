//! HTTP handlers for subscription endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{SubscribeRequest, SubscriptionResponse};
use crate::adapters::http::error::{parse_path_id, ApiError};
use crate::adapters::http::state::AppState;
use crate::adapters::http::users::handlers::user_id_from_path;
use crate::application::handlers::subscription::{
    GetSubscriptionQuery, ListActiveSubscriptionsQuery, SubscribeCommand, UnsubscribeCommand,
};
use crate::domain::foundation::{ErrorCode, SubscriptionId};

fn subscription_id_from_path(raw: &str) -> Result<SubscriptionId, ApiError> {
    parse_path_id(raw, ErrorCode::SubscriptionNotFound, "Subscription")
}

/// GET /api/users/:user_id/subscriptions
///
/// Only subscriptions active right now are returned.
pub async fn list_active_subscriptions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListActiveSubscriptionsQuery {
        user_id: user_id_from_path(&user_id)?,
    };
    let result = state.list_active_subscriptions_handler().handle(query).await?;
    let body: Vec<SubscriptionResponse> = result
        .subscriptions
        .into_iter()
        .map(SubscriptionResponse::from)
        .collect();
    Ok(Json(body))
}

/// POST /api/users/:user_id/subscriptions
pub async fn subscribe(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<SubscribeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = user_id_from_path(&user_id)?;
    let raw_price_id = req.product_price_id().map_err(ApiError::validation)?;
    let product_price_id = parse_path_id(
        raw_price_id,
        ErrorCode::ProductPriceNotFound,
        "Product price",
    )?;
    let cmd = SubscribeCommand {
        user_id,
        product_price_id,
    };
    let result = state.subscribe_handler().handle(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubscriptionResponse::from(result.subscription)),
    ))
}

/// GET /api/users/:user_id/subscriptions/:id
pub async fn get_subscription(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetSubscriptionQuery {
        user_id: user_id_from_path(&user_id)?,
        subscription_id: subscription_id_from_path(&id)?,
    };
    let result = state.get_subscription_handler().handle(query).await?;
    Ok(Json(SubscriptionResponse::from(result.subscription)))
}

/// DELETE /api/users/:user_id/subscriptions/:id
///
/// Responds with the subscription and its computed end date.
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UnsubscribeCommand {
        user_id: user_id_from_path(&user_id)?,
        subscription_id: subscription_id_from_path(&id)?,
    };
    let result = state.unsubscribe_handler().handle(cmd).await?;
    Ok(Json(SubscriptionResponse::from(result.subscription)))
}
