//! Request body extractor producing a loose field map.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::errors::{AppError, messages};

/// Request body parsed into a mapping of field name to JSON value.
///
/// Unlike `axum::Json<T>`, nothing is typed here: handlers run their own
/// field validation over the map so they can report which field is wrong
/// and how.
///
/// - an empty (or whitespace-only) body yields an empty map
/// - a JSON array yields an empty map
/// - a bare scalar (`5`, `"x"`, `true`, `null`) is rejected like malformed
///   input, since only objects and arrays are accepted as bodies
/// - a body that is not JSON at all is an [`AppError::InternalServerError`]
///   carrying the parser message
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonObject;
///
/// async fn create(JsonObject(fields): JsonObject) -> String {
///     format!("{} fields", fields.len())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    /// Parse raw body bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Array(_) => {
                tracing::debug!("Ignoring array JSON body");
                Ok(Self::default())
            }
            other => Err(AppError::internal(format!(
                "{}: {}",
                messages::SCALAR_BODY,
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::internal(rejection.body_text()))?;

        Self::from_bytes(&bytes)
    }
}
