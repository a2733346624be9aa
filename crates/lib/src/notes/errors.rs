//! Error types for note operations
use thiserror::Error;

/// Errors surfaced by the note controller.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("No notes found")]
    NoNotesFound,

    #[error("All fields are required")]
    MissingFields,

    #[error("Note ID required")]
    MissingId,

    #[error("Duplicate note title: {title}")]
    DuplicateTitle { title: String },

    #[error("Note not found")]
    NotFound,

    #[error("Invalid note data received")]
    InvalidData,
}

impl NoteError {
    /// Check if this error indicates missing or malformed request fields.
    pub fn is_validation(&self) -> bool {
        matches!(self, NoteError::MissingFields | NoteError::MissingId)
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NoteError::NoNotesFound | NoteError::NotFound)
    }

    /// Check if this error indicates a title conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, NoteError::DuplicateTitle { .. })
    }

    /// Check if this error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        true
    }
}

// Conversion from NoteError to the main Error type
impl From<NoteError> for crate::Error {
    fn from(err: NoteError) -> Self {
        crate::Error::Note(err)
    }
}
