use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::errors::{AppError, messages};

/// Static shared-secret bearer token check.
///
/// Cheap to clone; pass it to [`require_bearer_token`] with
/// `axum::middleware::from_fn_with_state`.
#[derive(Clone)]
pub struct BearerAuth {
    expected: Arc<str>,
}

impl BearerAuth {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            expected: format!("Bearer {}", token.as_ref()).into(),
        }
    }

    /// Check an `Authorization` header value.
    ///
    /// A missing or empty header is 401; any value other than the exact
    /// `Bearer <token>` string is 403.
    pub fn verify(&self, header: Option<&HeaderValue>) -> Result<(), AppError> {
        let header = match header {
            Some(value) if !value.is_empty() => value,
            _ => {
                tracing::debug!("Request without Authorization header");
                return Err(AppError::Unauthorized(
                    messages::MISSING_AUTHORIZATION.to_string(),
                ));
            }
        };

        if header.as_bytes() != self.expected.as_bytes() {
            tracing::debug!("Authorization header does not match");
            return Err(AppError::Forbidden(messages::INVALID_TOKEN.to_string()));
        }

        Ok(())
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("expected", &"<redacted>")
            .finish()
    }
}

/// Guard for routes that require the shared bearer token.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, middleware, routing::get};
/// use axum_helpers::{BearerAuth, require_bearer_token};
///
/// let protected = Router::new()
///     .route("/admin", get(admin))
///     .route_layer(middleware::from_fn_with_state(
///         BearerAuth::new("letmein"),
///         require_bearer_token,
///     ));
/// ```
pub async fn require_bearer_token(
    State(auth): State<BearerAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    auth.verify(request.headers().get(AUTHORIZATION))?;
    Ok(next.run(request).await)
}
