use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Response header carrying the running request count
pub const X_REQUEST_COUNT: HeaderName = HeaderName::from_static("x-request-count");

/// Process-wide request counter.
///
/// Clones share the same count, so a single instance is created at startup
/// and handed to the middleware as state. Tests create their own.
#[derive(Clone, Debug, Default)]
pub struct RequestCounter {
    count: Arc<AtomicU64>,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one request and return the updated total
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current total without recording a request
    pub fn current(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

/// Counts every request and stamps the total on the outgoing response.
pub async fn count_requests(
    State(counter): State<RequestCounter>,
    request: Request,
    next: Next,
) -> Response {
    let count = counter.increment();

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(X_REQUEST_COUNT, HeaderValue::from(count));

    response
}
