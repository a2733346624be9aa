//! The user operation core.

use std::sync::Arc;

use tracing::debug;

use super::errors::UserError;
use super::password;
use super::types::{CreateUser, DeleteUser, UpdateUser, UserView};
use crate::model::NewUser;
use crate::store::{NoteStore, UserStore};
use crate::{Error, Result};

/// Orchestrates validation outcomes, duplicate checks, hashing, and store
/// operations for the four user operations.
///
/// Stateless per call: each operation is an independent guard chain and any
/// guard failure short-circuits with no partial writes. No cross-request
/// mutual exclusion happens here; the store's uniqueness constraint is the
/// backstop for the duplicate-username race.
pub struct UserController {
    users: Arc<dyn UserStore>,
    notes: Arc<dyn NoteStore>,
}

impl UserController {
    /// Build a controller over the given stores.
    pub fn new(users: Arc<dyn UserStore>, notes: Arc<dyn NoteStore>) -> Self {
        Self { users, notes }
    }

    /// List all users, projected to exclude the password hash.
    ///
    /// An empty store is reported as [`UserError::NoUsersFound`], not as an
    /// empty success list.
    pub async fn list(&self) -> Result<Vec<UserView>> {
        let users = self.users.find_all().await?;
        if users.is_empty() {
            return Err(UserError::NoUsersFound.into());
        }

        Ok(users.into_iter().map(UserView::from).collect())
    }

    /// Create a user from validated input.
    ///
    /// Guard chain: duplicate username check, hash the password, write.
    /// The duplicate check and the write are separate store round-trips;
    /// the store's unique constraint closes the gap between them.
    ///
    /// # Returns
    /// The confirmation message naming the new user.
    pub async fn create(&self, input: CreateUser) -> Result<String> {
        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(UserError::DuplicateUsername {
                username: input.username,
            }
            .into());
        }

        let password_hash = password::hash_password(input.password).await?;

        let fields = NewUser {
            username: input.username,
            password_hash,
            roles: input.roles,
        };
        let user = match self.users.create(fields).await {
            Ok(user) => user,
            // A write the store refuses is reported generically; the
            // uniqueness backstop and infrastructure failures keep their
            // own classifications.
            Err(Error::Store(e)) if e.is_write_rejected() => {
                return Err(UserError::InvalidData.into());
            }
            Err(e) => return Err(e),
        };

        debug!(username = %user.username, id = %user.id, "user created");
        Ok(format!("New user {} created", user.username))
    }

    /// Update a user from validated input.
    ///
    /// Guard chain: existence check by id, duplicate check for the new
    /// username against *other* users (self-rename is allowed), then an
    /// unconditional overwrite of username/roles/active. The password is
    /// re-hashed only when the input carries one.
    pub async fn update(&self, input: UpdateUser) -> Result<String> {
        let Some(mut user) = self.users.find_by_id(&input.id).await? else {
            return Err(UserError::NotFound.into());
        };

        if let Some(existing) = self.users.find_by_username(&input.username).await?
            && existing.id != input.id
        {
            return Err(UserError::DuplicateUsername {
                username: input.username,
            }
            .into());
        }

        user.username = input.username;
        user.roles = input.roles;
        user.active = input.active;
        if let Some(new_password) = input.password {
            user.password_hash = password::hash_password(new_password).await?;
        }

        let updated = self.users.save(user).await?;

        debug!(username = %updated.username, id = %updated.id, "user updated");
        Ok(format!("{} updated", updated.username))
    }

    /// Delete a user from validated input.
    ///
    /// Guard chain: referential check (any note owned by the user blocks
    /// deletion; nothing cascades), existence check, delete.
    ///
    /// # Returns
    /// A confirmation string naming the deleted user's username and id.
    pub async fn delete(&self, input: DeleteUser) -> Result<String> {
        if self.notes.find_one_by_user(&input.id).await?.is_some() {
            return Err(UserError::HasAssignedNotes.into());
        }

        if self.users.find_by_id(&input.id).await?.is_none() {
            return Err(UserError::NotFound.into());
        }

        let deleted = self.users.delete(&input.id).await?;

        debug!(username = %deleted.username, id = %deleted.id, "user deleted");
        Ok(format!(
            "Username {} with ID {} deleted",
            deleted.username, deleted.id
        ))
    }
}
