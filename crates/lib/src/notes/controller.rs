//! The note operation core.

use std::sync::Arc;

use tracing::debug;

use super::errors::NoteError;
use super::types::{CreateNote, DeleteNote, NoteView, UpdateNote};
use crate::model::NewNote;
use crate::store::{NoteStore, UserStore};
use crate::{Error, Result};

/// Orchestrates validation outcomes, duplicate checks, and store operations
/// for the four note operations.
///
/// Holds the user store only to join usernames into read projections; note
/// creation does not verify the referenced user exists.
pub struct NoteController {
    notes: Arc<dyn NoteStore>,
    users: Arc<dyn UserStore>,
}

impl NoteController {
    /// Build a controller over the given stores.
    pub fn new(notes: Arc<dyn NoteStore>, users: Arc<dyn UserStore>) -> Self {
        Self { notes, users }
    }

    /// List all notes, each joined with its owner's username.
    ///
    /// An empty store is reported as [`NoteError::NoNotesFound`], matching
    /// the user listing behavior.
    pub async fn list(&self) -> Result<Vec<NoteView>> {
        let notes = self.notes.find_all().await?;
        if notes.is_empty() {
            return Err(NoteError::NoNotesFound.into());
        }

        let mut views = Vec::with_capacity(notes.len());
        for note in notes {
            // The delete guard keeps owners alive while their notes exist,
            // so a missing owner only occurs on hand-edited state.
            let username = match self.users.find_by_id(&note.user).await? {
                Some(owner) => owner.username,
                None => String::new(),
            };
            views.push(NoteView::new(note, username));
        }

        Ok(views)
    }

    /// Create a note from validated input.
    ///
    /// # Returns
    /// The confirmation message.
    pub async fn create(&self, input: CreateNote) -> Result<String> {
        if self.notes.find_by_title(&input.title).await?.is_some() {
            return Err(NoteError::DuplicateTitle { title: input.title }.into());
        }

        let fields = NewNote {
            user: input.user,
            title: input.title,
            text: input.text,
        };
        let note = match self.notes.create(fields).await {
            Ok(note) => note,
            Err(Error::Store(e)) if e.is_write_rejected() => {
                return Err(NoteError::InvalidData.into());
            }
            Err(e) => return Err(e),
        };

        debug!(title = %note.title, id = %note.id, ticket = note.ticket, "note created");
        Ok("New note created".to_string())
    }

    /// Update a note from validated input.
    ///
    /// Self-retitle is allowed; a title held by a *different* note is a
    /// conflict.
    pub async fn update(&self, input: UpdateNote) -> Result<String> {
        let Some(mut note) = self.notes.find_by_id(&input.id).await? else {
            return Err(NoteError::NotFound.into());
        };

        if let Some(existing) = self.notes.find_by_title(&input.title).await?
            && existing.id != input.id
        {
            return Err(NoteError::DuplicateTitle { title: input.title }.into());
        }

        note.user = input.user;
        note.title = input.title;
        note.text = input.text;
        note.completed = input.completed;

        let updated = self.notes.save(note).await?;

        debug!(title = %updated.title, id = %updated.id, "note updated");
        Ok(format!("'{}' updated", updated.title))
    }

    /// Delete a note from validated input.
    ///
    /// # Returns
    /// A confirmation string naming the deleted note's title and id.
    pub async fn delete(&self, input: DeleteNote) -> Result<String> {
        if self.notes.find_by_id(&input.id).await?.is_none() {
            return Err(NoteError::NotFound.into());
        }

        let deleted = self.notes.delete(&input.id).await?;

        debug!(title = %deleted.title, id = %deleted.id, "note deleted");
        Ok(format!(
            "Note '{}' with ID {} deleted",
            deleted.title, deleted.id
        ))
    }
}
