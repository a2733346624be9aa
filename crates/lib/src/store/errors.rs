//! Error types for store operations.
//!
//! These are the errors any store implementation can surface. The HTTP
//! layer maps them through the crate-level [`crate::Error`] helpers:
//! uniqueness violations become conflicts, not-found and rejected writes
//! become bad requests, everything else is an internal failure.

use thiserror::Error;

/// Errors that can occur during store operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found by key.
    #[error("Record not found in store '{store}': {key}")]
    KeyNotFound {
        /// The collection the lookup ran against
        store: String,
        /// The key that was not found
        key: String,
    },

    /// A unique constraint was violated.
    ///
    /// Raised under the store's write lock, so it holds even when two
    /// requests pass the controller's duplicate pre-check concurrently.
    #[error("Unique constraint violated in store '{store}': {field} '{value}' already exists")]
    UniqueViolation {
        /// The collection the write ran against
        store: String,
        /// The constrained field
        field: String,
        /// The duplicated value
        value: String,
    },

    /// The store refused the write because the record fails its checks.
    #[error("Write rejected by store '{store}': {reason}")]
    WriteRejected {
        /// The collection the write ran against
        store: String,
        /// Why the write was refused
        reason: String,
    },

    /// Serialization failed while persisting store state.
    #[error("Serialization failed in store '{store}': {reason}")]
    SerializationFailed { store: String, reason: String },

    /// Deserialization failed while loading store state.
    #[error("Deserialization failed in store '{store}': {reason}")]
    DeserializationFailed { store: String, reason: String },
}

impl StoreError {
    /// Check if this error indicates a record was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::KeyNotFound { .. })
    }

    /// Check if this error indicates a unique constraint violation.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation { .. })
    }

    /// Check if this error indicates the store refused the write.
    pub fn is_write_rejected(&self) -> bool {
        matches!(self, StoreError::WriteRejected { .. })
    }

    /// Check if this error is related to (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. }
        )
    }

    /// Get the collection name associated with this error.
    pub fn store_name(&self) -> &str {
        match self {
            StoreError::KeyNotFound { store, .. }
            | StoreError::UniqueViolation { store, .. }
            | StoreError::WriteRejected { store, .. }
            | StoreError::SerializationFailed { store, .. }
            | StoreError::DeserializationFailed { store, .. } => store,
        }
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
