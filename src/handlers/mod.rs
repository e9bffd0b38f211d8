pub mod events;
pub mod teachers;

use axum::extract::rejection::JsonRejection;

use crate::utils::error::AppError;

/// Malformed request bodies surface as a generic parse failure rather than
/// axum's default rejection, so every error leaves as `{"error": message}`.
pub(crate) fn bad_request(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}
