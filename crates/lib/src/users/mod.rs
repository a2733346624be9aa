//! User management operations.
//!
//! This is the behavioral core of the service: list, create, update, and
//! delete for user accounts, each a linear guard chain over the injected
//! stores. Payload validation is a set of pure functions from raw JSON to
//! typed inputs; password hashing lives in [`password`].

mod controller;
mod errors;
pub mod password;
mod types;

pub use controller::UserController;
pub use errors::UserError;
pub use types::{CreateUser, DeleteUser, UpdateUser, UserView};
