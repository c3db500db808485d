//! API routes module

pub mod demo;
pub mod products;

use axum::{middleware, routing::get, Json, Router};
use axum_helpers::{require_bearer_token, route_not_found, with_request_pipeline};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes, without the global pipeline
pub fn routes(state: &AppState) -> Router {
    let guard = middleware::from_fn_with_state(state.auth.clone(), require_bearer_token);

    // Unknown paths under /products still need a token, so the guard wraps
    // the subtree's own fallback too.
    let products = products::router(state)
        .fallback(route_not_found)
        .layer(guard.clone());

    let protected = demo::protected_router().route_layer(guard);

    Router::new()
        .merge(demo::public_router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(protected)
        .nest("/products", products)
}

/// Fully assembled application: routes, 404 fallback and request pipeline
pub fn app(state: &AppState) -> Router {
    with_request_pipeline(routes(state), state.request_counter.clone())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
