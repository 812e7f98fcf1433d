//! Per-request access logging.
//!
//! Every request gets a UUID v4 and a `request` span carrying it as `reqId`.
//! Inside that span two events are logged: `incoming request` with the method
//! and URL before the handler runs, and `request completed` with the status
//! code and the response time in milliseconds afterwards.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID stored in request extensions.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Logs the `incoming request` / `request completed` pair for one request.
pub async fn request_logger(mut request: Request, next: Next) -> Response {
    let req_id = Uuid::new_v4();
    request.extensions_mut().insert(RequestId(req_id));

    let span = tracing::info_span!("request", reqId = %req_id);

    async move {
        tracing::info!(
            req.method = %request.method(),
            req.url = %request.uri(),
            "incoming request"
        );

        let received = Instant::now();
        let response = next.run(request).await;

        // Fractional milliseconds, health checks usually finish well under 1ms
        let response_time = received.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            res.statusCode = response.status().as_u16(),
            responseTime = response_time,
            "request completed"
        );

        response
    }
    .instrument(span)
    .await
}
