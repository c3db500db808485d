//! Application state management

use axum_helpers::{BearerAuth, RequestCounter};
use domain_products::{InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Shared application state
///
/// Everything the routes need is built here, so tests can create as many
/// isolated instances as they like.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: ProductService<InMemoryProductRepository>,
    pub request_counter: RequestCounter,
    pub auth: BearerAuth,
}

impl AppState {
    /// State with the seed catalogue and a fresh request counter
    pub fn new(config: Config) -> Self {
        let auth = BearerAuth::new(&config.auth.token);
        Self {
            products: ProductService::new(InMemoryProductRepository::seeded()),
            request_counter: RequestCounter::new(),
            auth,
            config,
        }
    }
}
