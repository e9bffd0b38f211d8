mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::setup_pool;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use grading_server::routes::create_routes;
use grading_server::store::AppState;

async fn app() -> Router {
    create_routes(AppState::new(setup_pool().await))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_unknown_event_returns_404_with_error_body() {
    let app = app().await;

    let response = app.oneshot(get_request("/events/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Event not found");
}

#[tokio::test]
async fn post_event_returns_created_record() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/events",
            json!({
                "name": "Science Fair",
                "date": "2026-03-01",
                "time": "10:00",
                "description": "Annual event",
                "roles": [{"role": "Judge", "points": "5", "headcount": 2}]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Science Fair");
    assert_eq!(body["roles"][0]["points"], 5);
    assert_eq!(body["roles"][0]["teachers"], json!([]));

    let response = app.oneshot(get_request("/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn post_event_with_malformed_body_is_400() {
    let app = app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/events")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn put_event_merges_roles_and_wraps_response() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/events",
            json!({
                "name": "Science Fair",
                "roles": [{"role": "Judge", "points": 1, "headcount": 3}]
            }),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/events/{id}"),
            json!({
                "name": "Science Fair",
                "roles": [{"role": "Judge", "points": 5, "teachers": ["t1"]}]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Event updated successfully");
    assert_eq!(body["event"]["roles"][0]["headcount"], 3);
    assert_eq!(body["event"]["roles"][0]["points"], 5);
    assert_eq!(body["event"]["roles"][0]["teachers"], json!(["t1"]));
}

#[tokio::test]
async fn delete_event_then_get_is_404_unless_include_deleted() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/events", json!({"name": "Gone"})))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Event deleted successfully");

    let response = app
        .clone()
        .oneshot(get_request(&format!("/events/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get_request(&format!("/events/{id}?include_deleted=true")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["deleted_at"].is_string());
}

#[tokio::test]
async fn duplicate_teacher_email_is_409() {
    let app = app().await;

    let teacher = json!({
        "email": "ada@school.edu",
        "name": "Ada Lovelace",
        "department": "Mathematics",
        "position": "Professor"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/teachers", teacher.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["profilePhoto"], "");

    let response = app
        .clone()
        .oneshot(json_request("POST", "/teachers", teacher))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("ada@school.edu"));

    let response = app.oneshot(get_request("/teachers")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}
