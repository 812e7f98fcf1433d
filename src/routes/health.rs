//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with the current time whenever
//! the process can respond to HTTP. It performs no I/O and has no failure path.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `true`.
    pub ok: bool,
    /// Milliseconds since the Unix epoch when the request was handled.
    pub ts: i64,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            ok: true,
            ts: Utc::now().timestamp_millis(),
        }
    }
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}
