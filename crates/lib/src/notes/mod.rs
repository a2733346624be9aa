//! Note management operations.
//!
//! Structural sibling of [`crate::users`]: the same guard-chain shape over
//! the injected stores, with duplicate detection on the note title instead
//! of the username. Note views join the owning user's username at read
//! time.

mod controller;
mod errors;
mod types;

pub use controller::NoteController;
pub use errors::NoteError;
pub use types::{CreateNote, DeleteNote, NoteView, UpdateNote};
