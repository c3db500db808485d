//! HTTP handlers for Products API

use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{route_not_found, ErrorResponse, JsonObject};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, Product, ProductId, ProductInput, ProductQuery, UpdateProductPatch,
    UpdateProductPut,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        replace_product,
        patch_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProductPut, UpdateProductPatch, ErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(replace_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .method_not_allowed_fallback(route_not_found)
        .with_state(shared_service)
}

/// `{id}` path segment parsed as a product id.
///
/// Anything that is not an integer is rejected with "Invalid product ID"
/// before the handler runs.
pub struct ProductIdPath(pub ProductId);

impl<S> FromRequestParts<S> for ProductIdPath
where
    S: Send + Sync,
{
    type Rejection = ProductError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ProductError::InvalidId)?;

        parse_id(&raw).map(ProductIdPath)
    }
}

fn parse_id(raw: &str) -> ProductResult<ProductId> {
    raw.trim().parse().map_err(|_| ProductError::InvalidId)
}

/// Query parameters for listing products
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Only products priced at or below this value
    #[serde(rename = "maxPrice")]
    #[param(value_type = Option<f64>)]
    pub max_price: Option<String>,
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
}

impl ListProductsQuery {
    /// Collect the filters from raw query pairs.
    ///
    /// A repeated `maxPrice` can never be a single number, so it is
    /// rejected. A repeated `search` is not a single term and is ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> ProductResult<Self> {
        let mut max_prices = Vec::new();
        let mut searches = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "maxPrice" => max_prices.push(value),
                "search" => searches.push(value),
                _ => {}
            }
        }

        if max_prices.len() > 1 {
            return Err(ProductError::InvalidMaxPrice);
        }

        Ok(Self {
            max_price: max_prices.pop(),
            search: if searches.len() == 1 { searches.pop() } else { None },
        })
    }
}

impl TryFrom<ListProductsQuery> for ProductQuery {
    type Error = ProductError;

    fn try_from(query: ListProductsQuery) -> ProductResult<Self> {
        let max_price = match query.max_price.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|value| !value.is_nan())
                    .ok_or(ProductError::InvalidMaxPrice)?,
            ),
        };

        Ok(ProductQuery {
            max_price,
            search: query.search,
        })
    }
}

/// List products with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 400, description = "maxPrice is not a number", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ProductResult<Json<Vec<Product>>> {
    let Query(pairs) = query.map_err(|e| ProductError::InvalidQuery(e.body_text()))?;
    let query = ListProductsQuery::from_pairs(pairs)?;
    let products = service.get_all_products(query.try_into()?).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Invalid body", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonObject(fields): JsonObject,
) -> ProductResult<impl IntoResponse> {
    let input = CreateProduct::try_from(ProductInput::from(fields))?;
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductIdPath(id): ProductIdPath,
) -> ProductResult<Json<Product>> {
    let product = service
        .get_product_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Json(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProductPut,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 400, description = "Invalid product ID or body", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn replace_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductIdPath(id): ProductIdPath,
    JsonObject(fields): JsonObject,
) -> ProductResult<Json<Product>> {
    let input = UpdateProductPut::try_from(ProductInput::from(fields))?;
    let product = service
        .update_product_put(id, input)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Json(product))
}

/// Partially update a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProductPatch,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid product ID or body", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn patch_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductIdPath(id): ProductIdPath,
    JsonObject(fields): JsonObject,
) -> ProductResult<Json<Product>> {
    let patch = UpdateProductPatch::try_from(ProductInput::from(fields))?;
    let product = service
        .update_product_patch(id, patch)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductIdPath(id): ProductIdPath,
) -> ProductResult<impl IntoResponse> {
    if !service.delete_product_by_id(id).await? {
        return Err(ProductError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
