//! Error types for the Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The legacy API reports validation failures and unavailable books
        // as 401. NotFound is normalized to 404 on every endpoint.
        let (status, kind, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::UNAUTHORIZED, "ValidationError", msg.clone())
            }
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, "ConflictError", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFoundError", msg.clone()),
            AppError::Unavailable(msg) => {
                (StatusCode::UNAUTHORIZED, "UnavailableError", msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PersistenceError",
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PersistenceError",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: kind.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn validation_maps_to_401() {
        let err = AppError::Validation("Missing required fields: name".to_string());
        assert_eq!(status_of(err), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn conflict_maps_to_400() {
        let err = AppError::Conflict("Author with email a@b.c already exists".to_string());
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("Book not found".to_string());
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unavailable_maps_to_401() {
        let err = AppError::Unavailable("Book is not available".to_string());
        assert_eq!(status_of(err), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn internal_maps_to_500_with_opaque_message() {
        let response = AppError::Internal("pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
