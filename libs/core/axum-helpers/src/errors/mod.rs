pub mod handlers;
pub mod responses;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error messages reused across responses.
pub mod messages {
    pub const VALIDATION_FAILED: &str = "Request validation failed";
    pub const INVALID_UUID: &str = "Invalid UUID format";
    pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
}

/// Standard error response structure.
///
/// Returned for all plumbing-level error responses:
/// - `error`: machine-readable error identifier (e.g., "BadRequest")
/// - `message`: human-readable error message
/// - `details`: optional structured details (e.g., validation field errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "BadRequest",
///   "message": "Request validation failed",
///   "details": { "firstName": [{ "code": "length" }] }
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
