//! Typed inputs and projections for user operations
//!
//! Request bodies arrive as raw JSON with no transport-level schema. Each
//! operation has a validated input struct built by a pure function from the
//! raw payload; validation failures are tagged errors, decoupled from HTTP
//! response formatting.

use serde::Serialize;
use serde_json::Value;

use super::errors::UserError;
use crate::model::User;

/// Projection of a user record for read responses.
///
/// Deliberately has no password field, so no serialization path can leak
/// the hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub roles: Vec<String>,
    pub active: bool,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            roles: user.roles,
            active: user.active,
        }
    }
}

/// Validated input for user creation.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub roles: Vec<String>,
}

impl CreateUser {
    /// Validate a raw creation payload.
    ///
    /// Requires a non-empty `username`, a non-empty `password`, and a
    /// non-empty `roles` array of strings.
    pub fn from_payload(payload: &Value) -> Result<Self, UserError> {
        let username = non_empty_string(payload.get("username"));
        let password = non_empty_string(payload.get("password"));
        let roles = role_list(payload.get("roles"));

        match (username, password, roles) {
            (Some(username), Some(password), Some(roles)) => Ok(Self {
                username,
                password,
                roles,
            }),
            _ => Err(UserError::MissingFields),
        }
    }
}

/// Validated input for user update.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub id: String,
    pub username: String,
    pub roles: Vec<String>,
    /// Strictly a JSON boolean; "true" the string fails validation
    pub active: bool,
    /// Only set when the payload carries a non-empty password
    pub password: Option<String>,
}

impl UpdateUser {
    /// Validate a raw update payload.
    ///
    /// Requires `id`, `username`, a non-empty `roles` array, and `active`
    /// as an actual JSON boolean. `password` is optional; when present and
    /// non-empty the controller re-hashes, otherwise the stored hash is
    /// left unchanged.
    pub fn from_payload(payload: &Value) -> Result<Self, UserError> {
        let id = non_empty_string(payload.get("id"));
        let username = non_empty_string(payload.get("username"));
        let roles = role_list(payload.get("roles"));
        let active = payload.get("active").and_then(Value::as_bool);

        match (id, username, roles, active) {
            (Some(id), Some(username), Some(roles), Some(active)) => Ok(Self {
                id,
                username,
                roles,
                active,
                password: non_empty_string(payload.get("password")),
            }),
            _ => Err(UserError::MissingFields),
        }
    }
}

/// Validated input for user deletion.
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub id: String,
}

impl DeleteUser {
    /// Validate a raw deletion payload; only `id` is required.
    pub fn from_payload(payload: &Value) -> Result<Self, UserError> {
        match non_empty_string(payload.get("id")) {
            Some(id) => Ok(Self { id }),
            None => Err(UserError::MissingId),
        }
    }
}

/// A present, non-empty JSON string, or None.
fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// A present, non-empty JSON array of strings, or None.
fn role_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect()
}
