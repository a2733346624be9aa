//! Handlers for the /notes collection.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;

use super::{AppState, Message, error::ApiError};
use crate::notes::{CreateNote, DeleteNote, NoteView, UpdateNote};

/// Handler for GET /notes - list all notes with their owners' usernames.
pub(super) async fn list(State(state): State<AppState>) -> Result<Json<Vec<NoteView>>, ApiError> {
    Ok(Json(state.notes.list().await?))
}

/// Handler for POST /notes - create a note.
pub(super) async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let input = CreateNote::from_payload(&payload)?;
    let message = state.notes.create(input).await?;
    Ok((StatusCode::CREATED, Json(Message { message })))
}

/// Handler for PATCH /notes - update a note identified by the body's id.
pub(super) async fn update(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Message>, ApiError> {
    let input = UpdateNote::from_payload(&payload)?;
    let message = state.notes.update(input).await?;
    Ok(Json(Message { message }))
}

/// Handler for DELETE /notes - delete a note identified by the body's id.
///
/// Responds with a bare JSON confirmation string, not a message object.
pub(super) async fn remove(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<String>, ApiError> {
    let input = DeleteNote::from_payload(&payload)?;
    Ok(Json(state.notes.delete(input).await?))
}
