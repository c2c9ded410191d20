use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure for API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type (e.g., "Bad request", "Not found", "Conflict")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable code (e.g., "VALIDATION_ERROR")
    pub code: String,
}

/// Body returned for unknown routes under `/api`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RouteNotFoundResponse {
    pub message: String,
}
