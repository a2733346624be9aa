//! Handlers for the /users collection.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;

use super::{AppState, Message, error::ApiError};
use crate::users::{CreateUser, DeleteUser, UpdateUser, UserView};

/// Handler for GET /users - list all users without password fields.
pub(super) async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserView>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

/// Handler for POST /users - create a user.
pub(super) async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let input = CreateUser::from_payload(&payload)?;
    let message = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(Message { message })))
}

/// Handler for PATCH /users - update a user identified by the body's id.
pub(super) async fn update(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Message>, ApiError> {
    let input = UpdateUser::from_payload(&payload)?;
    let message = state.users.update(input).await?;
    Ok(Json(Message { message }))
}

/// Handler for DELETE /users - delete a user identified by the body's id.
///
/// Responds with a bare JSON confirmation string, not a message object.
pub(super) async fn remove(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<String>, ApiError> {
    let input = DeleteUser::from_payload(&payload)?;
    Ok(Json(state.users.delete(input).await?))
}
