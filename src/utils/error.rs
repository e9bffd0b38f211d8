use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::models::role::RoleDecodeError;
use crate::utils::response::ErrorBody;

/// Every failure a handler can produce. All of them are translated at the
/// request boundary into a status code plus an `{"error": message}` body;
/// nothing propagates past the handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid roles payload: {0}")]
    Decode(#[from] RoleDecodeError),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Decode(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::Database(e) => {
                error!(error = ?e, "Database error");
            }
            other => {
                error!(error = ?other, "Request failed");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.log();

        // Internal storage details never reach the client.
        let message = match &self {
            AppError::Database(_) => "A database error occurred".to_string(),
            other => other.to_string(),
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}
