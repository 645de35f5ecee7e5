//! Request-level errors.
//!
//! Handlers return [`AppError`] for input they cannot work with. Each variant
//! maps to a `400 Bad Request` with a one-line plain-text body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    /// A required request field is absent.
    #[error("Missing parameter: {name}")]
    MissingParameter { name: &'static str },

    /// A field is present but cannot be used.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        tracing::warn!(%status, error = %self, "rejecting request");

        (status, self.to_string()).into_response()
    }
}
