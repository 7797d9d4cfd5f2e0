use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User email '{0}' is already registered")]
    EmailAlreadyRegistered(String),

    #[error("User {0} does not exist")]
    NotFound(Uuid),

    /// Reserved: malformed identifiers are rejected at the HTTP boundary
    /// before the service runs.
    #[error("The provided id '{0}' is not valid")]
    InvalidId(String),

    #[error("Invalid pagination parameters: pageNumber={page_number}, pageSize={page_size}")]
    InvalidPagination { page_number: i64, page_size: i64 },

    /// Defect channel: a state that validation should have made impossible.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            UserError::EmailAlreadyRegistered(email) => (
                StatusCode::CONFLICT,
                "email_already_registered",
                format!("User email '{}' is already registered", email),
            ),
            UserError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("User {} does not exist", id),
            ),
            UserError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                "invalid_id",
                format!("The provided id '{}' is not valid", id),
            ),
            UserError::InvalidPagination { .. } => (
                StatusCode::BAD_REQUEST,
                "invalid_pagination",
                self.to_string(),
            ),
            UserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({
                "error": {
                    "type": error_type,
                    "message": message
                }
            })),
        )
            .into_response()
    }
}
