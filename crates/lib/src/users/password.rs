//! Password hashing for user accounts
//!
//! Uses Argon2id with a per-hash random salt at the default work factor.
//! Only the PHC hash string is ever persisted; verification re-derives from
//! it. Hashing is computationally expensive, so [`hash_password`] moves the
//! work onto the blocking thread pool and the calling handler suspends
//! until it completes.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core},
};

use super::errors::UserError;
use crate::Result;

/// Hash a password using Argon2id
///
/// # Arguments
/// * `password` - The plaintext password to hash
///
/// # Returns
/// The Argon2 hash string (PHC format), embedding the random salt.
pub async fn hash_password(password: impl Into<String>) -> Result<String> {
    let password = password.into();

    match tokio::task::spawn_blocking(move || hash_password_blocking(&password)).await {
        Ok(result) => result,
        Err(e) => Err(UserError::HashingFailed {
            reason: format!("hashing task failed: {e}"),
        }
        .into()),
    }
}

fn hash_password_blocking(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand_core::OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| UserError::HashingFailed {
            reason: format!("password hashing failed: {e}"),
        })?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against its hash
///
/// # Arguments
/// * `password` - The password to verify
/// * `password_hash` - The stored password hash (PHC format)
///
/// # Returns
/// Ok(()) if password is correct, Err otherwise
pub fn verify_password(password: impl AsRef<str>, password_hash: impl AsRef<str>) -> Result<()> {
    let parsed_hash =
        PasswordHash::new(password_hash.as_ref()).map_err(|_| UserError::VerificationFailed)?;

    Argon2::default()
        .verify_password(password.as_ref().as_bytes(), &parsed_hash)
        .map_err(|_| UserError::InvalidPassword.into())
}
