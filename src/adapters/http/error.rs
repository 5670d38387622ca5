//! Error responses shared by every endpoint.
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | any not found, malformed path id | 404 |
//! | AlreadySubscribed, AlreadyEnded, duplicate email or name | 409 |
//! | ValidationFailed | 422 |
//! | DataIntegrity, Infrastructure | 500 |

use std::str::FromStr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::subscription::SubscriptionError;

/// Standard error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ErrorResponse::new(code.to_string(), message),
        )
    }

    /// 422 with every violation listed under `details.violations`.
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        let err = CatalogError::validation(errors);
        Self::from(err)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }

    fn internal(code: ErrorCode, detail: &str) -> Self {
        tracing::error!(error_code = %code, error = %detail, "Request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(code.to_string(), "Internal server error"),
        )
    }
}

/// Parses an identifier taken from the request path.
///
/// Anything that is not a valid id is reported as the resource not existing.
pub fn parse_path_id<T: FromStr>(raw: &str, code: ErrorCode, resource: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found(code, format!("{} not found: {}", resource, raw)))
}

fn violations(errors: &[ValidationError]) -> serde_json::Value {
    let items: Vec<_> = errors
        .iter()
        .map(|e| json!({ "field": e.field(), "message": e.to_string() }))
        .collect();
    json!({ "violations": items })
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let code = err.code();
        let status = match &err {
            CatalogError::UserNotFound(_)
            | CatalogError::ProductNotFound(_)
            | CatalogError::ProductPriceNotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::DuplicateEmail(_) | CatalogError::DuplicateProductName(_) => {
                StatusCode::CONFLICT
            }
            CatalogError::ValidationFailed(errors) => {
                return Self::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::with_details(code.to_string(), err.message(), violations(errors)),
                );
            }
            CatalogError::Infrastructure(msg) => return Self::internal(code, msg),
        };
        Self::new(status, ErrorResponse::new(code.to_string(), err.message()))
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        let code = err.code();
        match &err {
            SubscriptionError::NotFound(_)
            | SubscriptionError::UserNotFound(_)
            | SubscriptionError::ProductPriceNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, ErrorResponse::new(code.to_string(), err.message()))
            }
            SubscriptionError::AlreadySubscribed {
                user_id,
                product_price_id,
            } => Self::new(
                StatusCode::CONFLICT,
                ErrorResponse::with_details(
                    code.to_string(),
                    err.message(),
                    json!({
                        "userId": user_id.to_string(),
                        "productPriceId": product_price_id.to_string(),
                    }),
                ),
            ),
            SubscriptionError::AlreadyEnded { end_date, .. } => Self::new(
                StatusCode::CONFLICT,
                ErrorResponse::with_details(
                    code.to_string(),
                    err.message(),
                    json!({ "endDate": end_date }),
                ),
            ),
            SubscriptionError::DataIntegrity { .. } => Self::internal(code, &err.message()),
            SubscriptionError::Infrastructure(msg) => Self::internal(code, msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
