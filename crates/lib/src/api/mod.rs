//! HTTP surface for notehub.
//!
//! Builds the axum router dispatching to the controllers, with request
//! tracing, CORS, a JSON 404 fallback, and centralized error formatting.
//! Ids travel in request bodies, not paths; all four verbs are mounted on
//! the collection routes.

mod error;
mod notes;
mod users;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::notes::NoteController;
use crate::store::{NoteStore, UserStore};
use crate::users::UserController;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserController>,
    pub notes: Arc<NoteController>,
}

impl AppState {
    /// Build the controllers over the given stores.
    pub fn new(users: Arc<dyn UserStore>, notes: Arc<dyn NoteStore>) -> Self {
        Self {
            users: Arc::new(UserController::new(users.clone(), notes.clone())),
            notes: Arc::new(NoteController::new(notes, users)),
        }
    }
}

/// Success body shape for mutating operations: `{"message": ...}`.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Build the application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/users",
            get(users::list)
                .post(users::create)
                .patch(users::update)
                .delete(users::remove),
        )
        .route(
            "/notes",
            get(notes::list)
                .post(notes::create)
                .patch(notes::update)
                .delete(notes::remove),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer restricted to the configured origins.
///
/// Origins that fail to parse as header values are skipped with a warning
/// rather than aborting startup.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::with_capacity(allowed_origins.len());
    for origin in allowed_origins {
        match origin.parse() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(%origin, "ignoring unparsable CORS origin"),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Handler for GET /health - liveness probe for the health CLI command.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Fallback for unmatched routes, mirroring the collection handlers' JSON
/// error shape.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "404 Not Found" })),
    )
}
