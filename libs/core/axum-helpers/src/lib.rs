//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: `{ "error": message }` responses, route-not-found fallback, panic boundary
//! - **[`middleware`]**: request counter, request logger, timing, bearer-token guard
//! - **[`extractors`]**: loose JSON body extractor
//! - **[`server`]**: server startup with graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use axum_helpers::{RequestCounter, server::create_app, with_request_pipeline};
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routes = Router::new().route("/", get(|| async { "hi" }));
//!     let app = with_request_pipeline(routes, RequestCounter::new());
//!     create_app(app, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

// Re-export error types
pub use errors::handlers::{RouteNotFound, catch_panic_layer, route_not_found};
pub use errors::{AppError, ErrorResponse, error_response};

// Re-export extractors
pub use extractors::JsonObject;

// Re-export middleware
pub use middleware::{
    BearerAuth, RequestCounter, X_REQUEST_COUNT, count_requests, log_request,
    require_bearer_token, time_request, with_request_pipeline,
};

// Re-export server helpers
pub use server::{create_app, shutdown_signal};
