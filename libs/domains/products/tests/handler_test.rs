//! Handler tests for Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request parsing (path ids, query filters, loose JSON bodies)
//! - Response serialization and status codes
//! - Error responses
//!
//! Only the products router is exercised here; auth and the request
//! pipeline are covered by the application tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::seeded()))
}

fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
    app.clone().oneshot(request(method, uri, body)).await.unwrap()
}

// Helper to parse JSON response body
async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_returns_seed_in_order() {
    let app = app();

    let response = send(&app, "GET", "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!([
            {"id": 1, "name": "Laptop", "price": 1200},
            {"id": 2, "name": "Headphones", "price": 150},
            {"id": 3, "name": "Keyboard", "price": 80}
        ])
    );
}

#[tokio::test]
async fn test_list_filters_by_max_price_and_search() {
    let app = app();

    let response = send(&app, "GET", "/?maxPrice=100", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!([{"id": 3, "name": "Keyboard", "price": 80}])
    );

    let response = send(&app, "GET", "/?search=LAP", None).await;
    assert_eq!(
        json_body(response).await,
        json!([{"id": 1, "name": "Laptop", "price": 1200}])
    );

    let response = send(&app, "GET", "/?maxPrice=500&search=o", None).await;
    let names: Vec<Value> = json_body(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].clone())
        .collect();
    assert_eq!(names, [json!("Headphones"), json!("Keyboard")]);
}

#[tokio::test]
async fn test_list_with_empty_filters_returns_everything() {
    let app = app();

    let response = send(&app, "GET", "/?maxPrice=&search=", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_rejects_non_numeric_max_price() {
    let app = app();

    let response = send(&app, "GET", "/?maxPrice=abc", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": "maxPrice must be a number"})
    );
}

#[tokio::test]
async fn test_get_by_id() {
    let app = app();

    let response = send(&app, "GET", "/2", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"id": 2, "name": "Headphones", "price": 150})
    );
}

#[tokio::test]
async fn test_get_missing_is_404() {
    let app = app();

    for uri in ["/99", "/-1", "/0"] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(
            json_body(response).await,
            json!({"error": "Product not found"})
        );
    }
}

#[tokio::test]
async fn test_non_integer_id_is_400_for_every_method() {
    let app = app();

    for method in ["GET", "PUT", "PATCH", "DELETE"] {
        let response = send(&app, method, "/abc", Some(r#"{"price": 1}"#)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(
            json_body(response).await,
            json!({"error": "Invalid product ID"})
        );
    }

    let response = send(&app, "GET", "/1.5", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_assigns_next_id() {
    let app = app();

    let response = send(&app, "POST", "/", Some(r#"{"name":"Mouse","price":25}"#)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response).await,
        json!({"id": 4, "name": "Mouse", "price": 25})
    );

    let response = send(&app, "GET", "/4", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_keeps_fractional_price() {
    let app = app();

    let response = send(&app, "POST", "/", Some(r#"{"name":"Cable","price":9.99}"#)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["price"], json!(9.99));
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = app();

    let cases = [
        (r#"{"price":25}"#, "name is required and must be a string"),
        (r#"{"name":"","price":25}"#, "name is required and must be a string"),
        (r#"{"name":"Mouse"}"#, "price is required and must be a number"),
        (r#"{"name":"Mouse","price":"25"}"#, "price is required and must be a number"),
        ("", "name is required and must be a string"),
        ("[1,2]", "name is required and must be a string"),
    ];

    for (body, message) in cases {
        let response = send(&app, "POST", "/", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json_body(response).await, json!({"error": message}));
    }

    // Nothing was stored
    let response = send(&app, "GET", "/", None).await;
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_malformed_json_is_500() {
    let app = app();

    let response = send(&app, "POST", "/", Some(r#"{"name":"#)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert_ne!(message, "Internal server error");
}

#[tokio::test]
async fn test_put_replaces_both_fields() {
    let app = app();

    let response = send(&app, "PUT", "/1", Some(r#"{"name":"Ultrabook","price":1500}"#)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"id": 1, "name": "Ultrabook", "price": 1500})
    );
}

#[tokio::test]
async fn test_put_requires_both_fields() {
    let app = app();

    let response = send(&app, "PUT", "/1", Some(r#"{"price":1500}"#)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": "name is required and must be a string"})
    );

    let response = send(&app, "GET", "/1", None).await;
    assert_eq!(json_body(response).await["name"], json!("Laptop"));
}

#[tokio::test]
async fn test_put_validates_before_lookup() {
    let app = app();

    let response = send(&app, "PUT", "/99", Some("{}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "PUT", "/99", Some(r#"{"name":"Ghost","price":1}"#)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_updates_only_given_fields() {
    let app = app();

    let response = send(&app, "PATCH", "/2", Some(r#"{"price":120}"#)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"id": 2, "name": "Headphones", "price": 120})
    );
}

#[tokio::test]
async fn test_patch_errors() {
    let app = app();

    let cases = [
        ("{}", "Provide at least one field to update"),
        (r#"{"name":5}"#, "name must be a string"),
        (r#"{"price":"cheap"}"#, "price must be a number"),
    ];

    for (body, message) in cases {
        let response = send(&app, "PATCH", "/1", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json_body(response).await, json!({"error": message}));
    }

    let response = send(&app, "PATCH", "/99", Some(r#"{"price":1}"#)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = app();

    let response = send(&app, "DELETE", "/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = send(&app, "GET", "/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", "/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_max_id_is_reused() {
    let app = app();

    let response = send(&app, "DELETE", "/3", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "POST", "/", Some(r#"{"name":"Mouse","price":25}"#)).await;
    assert_eq!(json_body(response).await["id"], json!(3));
}

#[tokio::test]
async fn test_unsupported_method_on_collection_is_route_not_found() {
    let app = app();

    let response = send(&app, "DELETE", "/", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("Route not found"));
    assert_eq!(body["method"], json!("DELETE"));
}

#[tokio::test]
async fn test_repeated_max_price_is_not_a_number() {
    let app = app();

    let response = send(&app, "GET", "/?maxPrice=1&maxPrice=2", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": "maxPrice must be a number"})
    );
}

#[tokio::test]
async fn test_repeated_search_is_ignored() {
    let app = app();

    let response = send(&app, "GET", "/?search=lap&search=key", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_scalar_json_body_is_500() {
    let app = app();

    for body in ["5", "\"Mouse\"", "true", "null"] {
        let response = send(&app, "POST", "/", Some(body)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{body}");
        let message = json_body(response).await["error"].as_str().unwrap().to_string();
        assert!(message.starts_with("Request body must be a JSON object or array"), "{message}");
    }

    // Nothing was stored
    let response = send(&app, "GET", "/", None).await;
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 3);
}
