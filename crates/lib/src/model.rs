//! Core records persisted by the stores.
//!
//! Records carry their storage identity (a UUID string assigned by the store
//! at creation) and unix timestamps. The `New*` structs hold the caller-side
//! fields for creation; the store fills in everything else.

use serde::{Deserialize, Serialize};

/// A user account record.
///
/// `password_hash` is an Argon2 PHC string. Read responses never include it:
/// the HTTP layer serializes [`crate::users::UserView`] projections, which
/// have no password field at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Storage identity, immutable after creation
    pub id: String,

    /// Unique login identifier, mutable
    pub username: String,

    /// Argon2 PHC hash of the password; never the plaintext
    pub password_hash: String,

    /// Non-empty list of role names
    pub roles: Vec<String>,

    /// Whether the account is enabled
    pub active: bool,

    /// Creation timestamp (unix seconds)
    pub created_at: i64,

    /// Last write timestamp (unix seconds)
    pub updated_at: i64,
}

/// Fields for creating a user; the store assigns id, timestamps, and sets
/// `active` to true.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

/// Identity of a deleted user, echoed back in the delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedUser {
    pub username: String,
    pub id: String,
}

/// A note record owned by a user.
///
/// `user` references a [`User::id`]. The relationship is many-to-one and
/// non-owning; a user cannot be deleted while notes reference it, but notes
/// are never cascaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Storage identity, immutable after creation
    pub id: String,

    /// Id of the owning user
    pub user: String,

    /// Note title, unique across notes by controller contract
    pub title: String,

    /// Note body
    pub text: String,

    /// Whether the note is marked done
    pub completed: bool,

    /// Ticket number assigned by the store, starting at 500
    pub ticket: u64,

    /// Creation timestamp (unix seconds)
    pub created_at: i64,

    /// Last write timestamp (unix seconds)
    pub updated_at: i64,
}

/// Fields for creating a note; the store assigns id, ticket number, and
/// timestamps, and sets `completed` to false.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user: String,
    pub title: String,
    pub text: String,
}

/// Identity of a deleted note, echoed back in the delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedNote {
    pub title: String,
    pub id: String,
}
