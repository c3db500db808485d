//! Products Domain
//!
//! In-memory product catalogue with CRUD endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, id/query/body parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Validators  │  ← Field rules for POST / PUT / PATCH
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Filtering, pass-through to the store
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::seeded());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validators;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    seed_products, CreateProduct, Product, ProductId, ProductInput, ProductQuery,
    UpdateProductPatch, UpdateProductPut,
};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use validators::ValidationResult;
