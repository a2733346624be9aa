//! Centralized error-to-response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::Message;
use crate::Error;
use crate::notes::NoteError;
use crate::users::UserError;

/// Wrapper turning crate errors into HTTP responses.
///
/// Status mapping: conflicts are 409; everything else the client caused is
/// 400 — including not-found on update/delete, which this API deliberately
/// reports as a bad request rather than 404. Infrastructure failures are
/// logged and surfaced as a generic 500.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self(err.into())
    }
}

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_conflict() {
            StatusCode::CONFLICT
        } else if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(module = self.0.module(), error = %self.0, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(Message { message })).into_response()
    }
}
