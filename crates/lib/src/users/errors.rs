//! Error types for user operations
use thiserror::Error;

/// Errors surfaced by the user controller.
///
/// The display strings are the client-facing failure messages; the HTTP
/// layer wraps them as `{"message": ...}` bodies and derives the status
/// code from the classification helpers below.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("No users found")]
    NoUsersFound,

    #[error("All fields are required")]
    MissingFields,

    #[error("User ID required")]
    MissingId,

    #[error("Duplicate username: {username}")]
    DuplicateUsername { username: String },

    #[error("User not found")]
    NotFound,

    #[error("User has assigned notes")]
    HasAssignedNotes,

    #[error("Invalid user data received")]
    InvalidData,

    #[error("Password hashing failed: {reason}")]
    HashingFailed { reason: String },

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password verification failed")]
    VerificationFailed,
}

impl UserError {
    /// Check if this error indicates missing or malformed request fields.
    pub fn is_validation(&self) -> bool {
        matches!(self, UserError::MissingFields | UserError::MissingId)
    }

    /// Check if this error indicates a resource was not found.
    ///
    /// An empty user list counts: the API reports it as a failure rather
    /// than an empty success list.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::NoUsersFound | UserError::NotFound)
    }

    /// Check if this error indicates a username conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, UserError::DuplicateUsername { .. })
    }

    /// Check if this error blocks deletion because notes reference the user.
    pub fn is_referential(&self) -> bool {
        matches!(self, UserError::HasAssignedNotes)
    }

    /// Check if this error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            UserError::HashingFailed { .. }
                | UserError::InvalidPassword
                | UserError::VerificationFailed
        )
    }
}

// Conversion from UserError to the main Error type
impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
