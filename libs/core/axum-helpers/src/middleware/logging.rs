use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};
use tracing::info;

/// Logs timestamp, method and URI of every request before dispatch.
pub async fn log_request(request: Request, next: Next) -> Response {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    info!(
        %timestamp,
        method = %request.method(),
        uri = %request.uri(),
        "[{}] {} {}",
        timestamp,
        request.method(),
        request.uri()
    );

    next.run(request).await
}

/// Logs how long the rest of the pipeline took to produce a response.
pub async fn time_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis();
    info!(
        status = response.status().as_u16(),
        elapsed_ms = elapsed_ms as u64,
        "{} {} - {}ms",
        method,
        uri,
        elapsed_ms
    );

    response
}
