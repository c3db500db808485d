use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::ProductId;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid product ID")]
    InvalidId,

    #[error("maxPrice must be a number")]
    InvalidMaxPrice,

    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    Validation(String),

    #[error("Product not found")]
    NotFound(ProductId),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidId
            | ProductError::InvalidMaxPrice
            | ProductError::InvalidQuery(_)
            | ProductError::Validation(_) => AppError::BadRequest(err.to_string()),
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = id, "Product lookup missed");
                AppError::NotFound(err.to_string())
            }
            ProductError::Internal(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_client_errors_are_bad_request() {
        for err in [
            ProductError::InvalidId,
            ProductError::InvalidMaxPrice,
            ProductError::Validation("name must be a string".into()),
        ] {
            assert_eq!(AppError::from(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_not_found_message_does_not_leak_id() {
        let app_error = AppError::from(ProductError::NotFound(99));
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
        assert!(matches!(app_error, AppError::NotFound(ref m) if m == "Product not found"));
    }
}
