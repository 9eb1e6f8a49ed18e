//! Per-request access logging.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Log method, path, status, and latency once the inner service has produced a response.
///
/// The response is passed through untouched.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms,
        "Request completed"
    );
    response
}
