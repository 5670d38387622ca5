//! HTTP middleware for axum.
//!
//! Cross-cutting layers applied around the API router:
//!
//! - request tracing
//! - CORS for the configured origins
//! - a per-request timeout

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Wraps `router` with the tracing, CORS and timeout layers.
pub fn apply(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins.
///
/// Without configured origins, development allows any origin and other
/// environments allow none.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let base = CorsLayer::new().allow_methods(methods).allow_headers(Any);

    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && config.environment == crate::config::Environment::Development {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(origins))
    }
}
