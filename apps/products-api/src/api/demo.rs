//! Sample routes showing the public/protected split

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "message": ... }` body returned by the demo routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Routes anyone can call
pub fn public_router() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/public", get(public))
}

/// Routes that need a bearer token; the caller adds the guard
pub fn protected_router() -> Router {
    Router::new()
        .route("/protected", get(protected))
        .route("/admin", get(admin))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Demo",
    responses((status = 200, body = Message))
)]
pub async fn hello() -> Json<Message> {
    Message::new("Hello world!")
}

#[utoipa::path(
    get,
    path = "/public",
    tag = "Demo",
    responses((status = 200, body = Message))
)]
pub async fn public() -> Json<Message> {
    Message::new("Public: anyone can access this.")
}

#[utoipa::path(
    get,
    path = "/protected",
    tag = "Demo",
    responses(
        (status = 200, body = Message),
        (status = 401, description = "Missing Authorization header"),
        (status = 403, description = "Invalid token")
    )
)]
pub async fn protected() -> Json<Message> {
    Message::new("Protected: you have access")
}

#[utoipa::path(
    get,
    path = "/admin",
    tag = "Demo",
    responses(
        (status = 200, body = Message),
        (status = 401, description = "Missing Authorization header"),
        (status = 403, description = "Invalid token")
    )
)]
pub async fn admin() -> Json<Message> {
    Message::new("Admin: welcome, mighty one")
}
