//! Storage layer for notehub records.
//!
//! This module provides the `UserStore` and `NoteStore` traits and the
//! in-memory implementation backing them.
//!
//! The traits define the interface the controllers depend on. Controllers
//! receive them as injected trait objects, which keeps the operation cores
//! independent of the specific storage mechanism and lets tests substitute
//! fakes trivially. All implementations must be `Send` and `Sync` to allow
//! sharing across request tasks, and implement `Any` to allow for
//! downcasting if needed.

mod errors;
mod memory;

pub use errors::StoreError;
pub use memory::MemoryStore;

use std::any::Any;

use async_trait::async_trait;

use crate::Result;
use crate::model::{DeletedNote, DeletedUser, NewNote, NewUser, Note, User};

/// Persistent collection of user records.
///
/// Every method is a single round-trip; no multi-call atomicity is provided
/// beyond what an individual method guarantees internally. The one
/// cross-record invariant the store itself enforces is username uniqueness:
/// `create` and `save` fail with [`StoreError::UniqueViolation`] when
/// another record already holds the username. This backstops the
/// controller's pre-write duplicate check against concurrent writers.
#[async_trait]
pub trait UserStore: Send + Sync + Any {
    /// Retrieves all user records.
    ///
    /// # Returns
    /// A `Result` containing all users, sorted by creation time then id for
    /// a deterministic order. An empty store yields an empty vector, not an
    /// error; the controller decides how to present emptiness.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Looks up a user by exact username match.
    ///
    /// # Returns
    /// `Ok(Some(user))` if a record holds the username, `Ok(None)` otherwise.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Looks up a user by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Creates a new user record.
    ///
    /// The store assigns a UUID id and timestamps and sets `active` to true.
    ///
    /// # Errors
    /// * [`StoreError::UniqueViolation`] if the username is already taken
    /// * [`StoreError::WriteRejected`] if the fields fail store-level checks
    async fn create(&self, fields: NewUser) -> Result<User>;

    /// Persists a mutated user record, refreshing `updated_at`.
    ///
    /// # Errors
    /// * [`StoreError::KeyNotFound`] if no record has the given id
    /// * [`StoreError::UniqueViolation`] if a different record holds the username
    async fn save(&self, user: User) -> Result<User>;

    /// Deletes a user record by id.
    ///
    /// # Returns
    /// The `{username, id}` pair of the deleted record, for confirmation
    /// messages.
    async fn delete(&self, id: &str) -> Result<DeletedUser>;
}

/// Persistent collection of note records.
#[async_trait]
pub trait NoteStore: Send + Sync + Any {
    /// Retrieves all note records, sorted by ticket number.
    async fn find_all(&self) -> Result<Vec<Note>>;

    /// Looks up a note by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Note>>;

    /// Looks up a note by exact title match.
    async fn find_by_title(&self, title: &str) -> Result<Option<Note>>;

    /// Finds any one note owned by the given user id.
    ///
    /// Used for the referential delete guard: a user with at least one note
    /// cannot be deleted.
    async fn find_one_by_user(&self, user_id: &str) -> Result<Option<Note>>;

    /// Creates a new note record.
    ///
    /// The store assigns a UUID id, the next ticket number, and timestamps,
    /// and sets `completed` to false.
    async fn create(&self, fields: NewNote) -> Result<Note>;

    /// Persists a mutated note record, refreshing `updated_at`.
    async fn save(&self, note: Note) -> Result<Note>;

    /// Deletes a note record by id.
    async fn delete(&self, id: &str) -> Result<DeletedNote>;
}
