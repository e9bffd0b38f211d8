use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::handlers::events::{create_event, delete_event, get_event, list_events, update_event};
use crate::handlers::teachers::{create_teacher, list_teachers};
use crate::store::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/teachers", get(list_teachers).post(create_teacher))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}
