use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::handlers::bad_request;
use crate::models::teacher::TeacherPayload;
use crate::store::AppState;
use crate::utils::error::AppError;

pub async fn list_teachers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teachers = state.teachers.list().await?;
    Ok(Json(teachers))
}

pub async fn create_teacher(
    State(state): State<AppState>,
    payload: Result<Json<TeacherPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(bad_request)?;
    let teacher = state.teachers.create(payload).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}
