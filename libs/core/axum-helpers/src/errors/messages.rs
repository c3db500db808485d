//! Standard error messages shared by the middleware and fallback handlers.

pub const INTERNAL_ERROR: &str = "Internal server error";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const MISSING_AUTHORIZATION: &str = "Missing Authorization header";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const SCALAR_BODY: &str = "Request body must be a JSON object or array";
