use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::handlers::bad_request;
use crate::models::event::{Event, EventPayload};
use crate::store::AppState;
use crate::utils::error::AppError;
use crate::utils::response::MessageBody;

/// Soft-deleted events are excluded unless `include_deleted=true` is passed.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Serialize)]
struct UpdatedEvent {
    event: Event,
    message: String,
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.events.list(query.include_deleted).await?;
    tracing::debug!(count = events.len(), "fetched events");
    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(bad_request)?;
    let event = state.events.create(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.events.get(id, query.include_deleted).await?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(bad_request)?;
    let event = state.events.update(id, payload).await?;
    Ok(Json(UpdatedEvent {
        event,
        message: "Event updated successfully".to_string(),
    }))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.events.soft_delete(id).await?;
    Ok(Json(MessageBody::new("Event deleted successfully")))
}
