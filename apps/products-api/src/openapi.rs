//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::demo;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "In-memory product catalogue behind a bearer token"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(demo::hello, demo::public, demo::protected, demo::admin),
    components(schemas(demo::Message)),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Demo", description = "Public and protected sample routes"),
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;
