//! End-to-end tests driving the axum router in process.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use notehub::api::{self, AppState};
use notehub::store::{MemoryStore, NoteStore, UserStore};

/// Build a router over a fresh in-memory store.
fn test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let users: Arc<dyn UserStore> = store.clone();
    let notes: Arc<dyn NoteStore> = store.clone();

    api::router(
        AppState::new(users, notes),
        api::cors_layer(&["http://localhost:3000".to_string()]),
    )
}

/// Fire one request at the router and decode the JSON response.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn message_of(body: &Value) -> &str {
    body.get("message")
        .and_then(Value::as_str)
        .expect("response should carry a message field")
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"username": "bob", "password": "pw1", "roles": ["Employee"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(message_of(&body).contains("bob"));

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);

    let record = records[0].as_object().unwrap();
    assert_eq!(record["username"], "bob");
    assert!(record.keys().all(|k| !k.contains("password")));
}

#[tokio::test]
async fn empty_user_list_is_a_bad_request() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "No users found");
}

#[tokio::test]
async fn missing_fields_and_empty_roles_are_rejected() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"username": "bob", "password": "pw1", "roles": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "All fields are required");

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"username": "bob", "roles": ["Employee"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let app = test_app();

    let payload = json!({"username": "alice", "password": "pw1", "roles": ["Employee"]});
    let (status, _) = send(&app, "POST", "/users", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(message_of(&body).contains("alice"));
}

#[tokio::test]
async fn update_requires_a_real_boolean_for_active() {
    let app = test_app();

    send(
        &app,
        "POST",
        "/users",
        Some(json!({"username": "bob", "password": "pw1", "roles": ["Employee"]})),
    )
    .await;
    let (_, body) = send(&app, "GET", "/users", None).await;
    let id = body[0]["id"].as_str().unwrap().to_string();

    // "true" the string fails validation
    let (status, body) = send(
        &app,
        "PATCH",
        "/users",
        Some(json!({"id": id, "username": "bob", "roles": ["Employee"], "active": "true"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "All fields are required");

    // true the boolean succeeds
    let (status, body) = send(
        &app,
        "PATCH",
        "/users",
        Some(json!({"id": id, "username": "bob", "roles": ["Employee"], "active": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message_of(&body), "bob updated");
}

#[tokio::test]
async fn unknown_id_maps_to_bad_request_not_404() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "PATCH",
        "/users",
        Some(json!({
            "id": "no-such-id",
            "username": "ghost",
            "roles": ["Employee"],
            "active": true,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "User not found");

    let (status, _) = send(&app, "DELETE", "/users", Some(json!({"id": "no-such-id"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_is_guarded_by_notes_then_succeeds() {
    let app = test_app();

    send(
        &app,
        "POST",
        "/users",
        Some(json!({"username": "alice", "password": "pw1", "roles": ["Manager"]})),
    )
    .await;
    let (_, body) = send(&app, "GET", "/users", None).await;
    let user_id = body[0]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/notes",
        Some(json!({"user": user_id, "title": "todo", "text": "body"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Blocked while the note exists
    let (status, body) = send(&app, "DELETE", "/users", Some(json!({"id": user_id}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "User has assigned notes");

    // Remove the note, then the user
    let (_, body) = send(&app, "GET", "/notes", None).await;
    let note_id = body[0]["id"].as_str().unwrap().to_string();
    let (status, reply) = send(&app, "DELETE", "/notes", Some(json!({"id": note_id}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(reply.as_str().unwrap().contains("todo"));

    let (status, reply) = send(&app, "DELETE", "/users", Some(json!({"id": user_id}))).await;
    assert_eq!(status, StatusCode::OK);
    // The confirmation is a bare JSON string naming username and id
    let reply = reply.as_str().unwrap();
    assert!(reply.contains("alice"));
    assert!(reply.contains(&user_id));
}

#[tokio::test]
async fn note_list_carries_owner_username_and_ticket() {
    let app = test_app();

    send(
        &app,
        "POST",
        "/users",
        Some(json!({"username": "alice", "password": "pw1", "roles": ["Employee"]})),
    )
    .await;
    let (_, body) = send(&app, "GET", "/users", None).await;
    let user_id = body[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", "/notes", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message_of(&body), "No notes found");

    send(
        &app,
        "POST",
        "/notes",
        Some(json!({"user": user_id, "title": "todo", "text": "body"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    let note = &body.as_array().unwrap()[0];
    assert_eq!(note["username"], "alice");
    assert_eq!(note["ticket"], 500);
    assert_eq!(note["completed"], false);
}

#[tokio::test]
async fn unmatched_routes_return_json_404() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message_of(&body), "404 Not Found");
}

#[tokio::test]
async fn health_probe_reports_healthy() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
