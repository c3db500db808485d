//! Request pipeline middleware.
//!
//! Global interceptors, outermost first:
//!
//! 1. [`count_requests`] - running request count, `X-Request-Count` header
//! 2. [`log_request`] - timestamp, method and URI before dispatch
//! 3. [`time_request`] - elapsed time once the response is produced
//! 4. [`catch_panic_layer`] - converts handler panics into 500 responses
//!
//! [`require_bearer_token`] is route-scoped and applied by the application
//! to the routes it protects.

pub mod auth;
pub mod counter;
pub mod logging;

pub use auth::{BearerAuth, require_bearer_token};
pub use counter::{RequestCounter, X_REQUEST_COUNT, count_requests};
pub use logging::{log_request, time_request};

use axum::{Router, middleware};
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::NormalizePathLayer;

use crate::errors::handlers::{catch_panic_layer, route_not_found};

/// Wrap a fully routed application in the global request pipeline.
///
/// Registers [`route_not_found`] as both the fallback and the
/// method-not-allowed fallback, so call this after every route is added.
///
/// A trailing slash is trimmed before routing, so `/products/` reaches the
/// same handler as `/products`. Layers added with `Router::layer` only run
/// after a route is picked, so the trimming wraps the whole router instead.
pub fn with_request_pipeline(router: Router, counter: RequestCounter) -> Router {
    let routed = router
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(counter, count_requests))
                .layer(middleware::from_fn(log_request))
                .layer(middleware::from_fn(time_request))
                .layer(catch_panic_layer()),
        );

    Router::new().fallback_service(NormalizePathLayer::trim_trailing_slash().layer(routed))
}
