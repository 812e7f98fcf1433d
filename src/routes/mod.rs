//! HTTP route handlers.
//!
//! The service answers a single liveness route. Everything else, including a
//! known path with the wrong method, falls through to a JSON 404. Request
//! logging wraps both.

pub mod health;

use axum::{
    http::{
        header::{HeaderValue, CACHE_CONTROL},
        Method, Uri,
    },
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::error::ApiError;
use crate::middleware::request_logger;

/// Answers requests that match no route.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    ApiError::NotFound {
        method,
        url: url.to_string(),
    }
}

/// Creates the Axum router with the health route, fallback and logging.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        // Unsupported methods get the same JSON 404 as unknown paths, not a bare 405
        .route(HEALTH_PATH, get(health::health).fallback(not_found))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .fallback(not_found)
        // Outermost so both log lines cover fallbacks and header layers
        .layer(middleware::from_fn(request_logger))
}
