//! Typed inputs and projections for note operations

use serde::Serialize;
use serde_json::Value;

use super::errors::NoteError;
use crate::model::Note;

/// Projection of a note record for read responses, joined with the owning
/// user's username.
#[derive(Debug, Clone, Serialize)]
pub struct NoteView {
    pub id: String,
    pub user: String,
    pub username: String,
    pub title: String,
    pub text: String,
    pub completed: bool,
    pub ticket: u64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl NoteView {
    /// Join a note record with its owner's username.
    pub fn new(note: Note, username: String) -> Self {
        Self {
            id: note.id,
            user: note.user,
            username,
            title: note.title,
            text: note.text,
            completed: note.completed,
            ticket: note.ticket,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Validated input for note creation.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub user: String,
    pub title: String,
    pub text: String,
}

impl CreateNote {
    /// Validate a raw creation payload; `user`, `title`, and `text` are all
    /// required non-empty strings.
    pub fn from_payload(payload: &Value) -> Result<Self, NoteError> {
        let user = non_empty_string(payload.get("user"));
        let title = non_empty_string(payload.get("title"));
        let text = non_empty_string(payload.get("text"));

        match (user, title, text) {
            (Some(user), Some(title), Some(text)) => Ok(Self { user, title, text }),
            _ => Err(NoteError::MissingFields),
        }
    }
}

/// Validated input for note update.
#[derive(Debug, Clone)]
pub struct UpdateNote {
    pub id: String,
    pub user: String,
    pub title: String,
    pub text: String,
    /// Strictly a JSON boolean, like `active` on user updates
    pub completed: bool,
}

impl UpdateNote {
    /// Validate a raw update payload; all fields are required and
    /// `completed` must be an actual JSON boolean.
    pub fn from_payload(payload: &Value) -> Result<Self, NoteError> {
        let id = non_empty_string(payload.get("id"));
        let user = non_empty_string(payload.get("user"));
        let title = non_empty_string(payload.get("title"));
        let text = non_empty_string(payload.get("text"));
        let completed = payload.get("completed").and_then(Value::as_bool);

        match (id, user, title, text, completed) {
            (Some(id), Some(user), Some(title), Some(text), Some(completed)) => Ok(Self {
                id,
                user,
                title,
                text,
                completed,
            }),
            _ => Err(NoteError::MissingFields),
        }
    }
}

/// Validated input for note deletion.
#[derive(Debug, Clone)]
pub struct DeleteNote {
    pub id: String,
}

impl DeleteNote {
    /// Validate a raw deletion payload; only `id` is required.
    pub fn from_payload(payload: &Value) -> Result<Self, NoteError> {
        match non_empty_string(payload.get("id")) {
            Some(id) => Ok(Self { id }),
            None => Err(NoteError::MissingId),
        }
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
