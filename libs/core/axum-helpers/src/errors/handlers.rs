use std::any::Any;

use axum::{
    Json,
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::ToSchema;

use super::{AppError, messages};

/// Body returned when no route matches the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteNotFound {
    pub error: String,
    /// Original request path, including the query string
    pub path: String,
    pub method: String,
}

/// Fallback handler for requests that match no route.
///
/// Also registered as the method-not-allowed fallback, so a known path
/// requested with an unsupported method is reported the same way.
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    tracing::info!(%method, %path, "Route not found");

    let body = RouteNotFound {
        error: messages::ROUTE_NOT_FOUND.to_string(),
        path,
        method: method.to_string(),
    };

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Panic handler signature accepted by [`CatchPanicLayer::custom`]
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Last-resort error boundary.
///
/// Converts a panic escaping a handler into a 500 response. Textual panic
/// payloads become the error message; anything else is reported with the
/// generic internal error message.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = payload.downcast_ref::<String>() {
        Some(message.clone())
    } else {
        payload.downcast_ref::<&str>().map(|message| message.to_string())
    };

    AppError::InternalServerError(message).into_response()
}
