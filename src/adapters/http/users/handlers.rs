//! HTTP handlers for user endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::adapters::http::error::{parse_path_id, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::handlers::user::{CreateUserCommand, GetUserQuery, UpdateUserCommand};
use crate::domain::foundation::{ErrorCode, UserId};

pub(crate) fn user_id_from_path(raw: &str) -> Result<UserId, ApiError> {
    parse_path_id(raw, ErrorCode::UserNotFound, "User")
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.list_users_handler().handle().await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(body))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateUserCommand {
        email: req.email,
        first_name: req.first_name,
        last_name: req.last_name,
    };
    let result = state.create_user_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(result.user))))
}

/// GET /api/users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetUserQuery {
        user_id: user_id_from_path(&id)?,
    };
    let user = state.get_user_handler().handle(query).await?;
    Ok(Json(UserResponse::from(user)))
}

/// PATCH /api/users/:user_id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateUserCommand {
        user_id: user_id_from_path(&id)?,
        changes: req.into(),
    };
    let result = state.update_user_handler().handle(cmd).await?;
    Ok(Json(UserResponse::from(result.user)))
}
