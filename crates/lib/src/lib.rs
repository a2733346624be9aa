//!
//! notehub: a small REST backend for user and note management.
//! This library provides the stores, controllers, and HTTP surface; the
//! companion binary crate wires them into a running server.
//!
//! ## Core Concepts
//!
//! * **Records (`model`)**: The `User` and `Note` records persisted by the stores.
//! * **Stores (`store`)**: Capability objects (`UserStore`, `NoteStore`) abstracting
//!   the persistence layer, with an in-memory implementation (`MemoryStore`) that
//!   supports JSON file persistence.
//! * **Controllers (`users`, `notes`)**: The per-entity operation cores. Each
//!   operation is a linear guard chain: validate, check existence/duplicates,
//!   check referential constraints, write, respond.
//! * **HTTP surface (`api`)**: axum router and handlers mapping controller
//!   results and errors onto JSON responses and status codes.

pub mod api;
pub mod model;
pub mod notes;
pub mod store;
pub mod users;

/// Result type used throughout the notehub library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the notehub library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured user-controller errors from the users module
    #[error(transparent)]
    User(users::UserError),

    /// Structured note-controller errors from the notes module
    #[error(transparent)]
    Note(notes::NoteError),

    /// Structured storage errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::User(_) => "users",
            Error::Note(_) => "notes",
            Error::Store(_) => "store",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates missing or malformed request fields.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_validation(),
            Error::Note(note_err) => note_err.is_validation(),
            _ => false,
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_not_found(),
            Error::Note(note_err) => note_err.is_not_found(),
            Error::Store(store_err) => store_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (duplicate username or title).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_conflict(),
            Error::Note(note_err) => note_err.is_conflict(),
            Error::Store(store_err) => store_err.is_unique_violation(),
            _ => false,
        }
    }

    /// Check if this error was caused by the request rather than the server.
    ///
    /// The HTTP layer maps these to 400 (conflicts are mapped separately to
    /// 409). Note that not-found maps to 400, not 404: the API contract
    /// deliberately reports unknown ids on update/delete as bad requests.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_client_error(),
            Error::Note(note_err) => note_err.is_client_error(),
            Error::Store(store_err) => {
                store_err.is_not_found() || store_err.is_write_rejected()
            }
            _ => false,
        }
    }
}
