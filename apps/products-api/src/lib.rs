//! Products API
//!
//! Demo routes plus the bearer-protected `/products` CRUD subtree, wrapped in
//! the shared request pipeline from `axum_helpers`.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

pub use config::Config;
pub use state::AppState;
