//! HTTP error types.
//!
//! Maps domain errors from `hili-content` into HTTP responses. Every error
//! produces a JSON body of the shape `{"error": "..."}` — the contract the
//! admin dashboard expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hili_content::{EventError, LinkError, SocialError};

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Client sent invalid input (missing field, bad enum value, duplicate
    /// platform).
    BadRequest(String),
    /// Requested record not found.
    NotFound(String),
    /// Missing or wrong admin token on a mutating request.
    Unauthorized(String),
    /// The repository failed. Unreachable with the in-memory backend.
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, axum::Json(ErrorBody { error })).into_response()
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound => Self::NotFound(err.to_string()),
            EventError::InvalidKind { .. } => Self::BadRequest(err.to_string()),
            EventError::Store(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::NotFound => Self::NotFound(err.to_string()),
            LinkError::Store(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<SocialError> for AppError {
    fn from(err: SocialError) -> Self {
        match err {
            SocialError::NotFound => Self::NotFound(err.to_string()),
            SocialError::InvalidPlatform { .. } | SocialError::AlreadyExists { .. } => {
                Self::BadRequest(err.to_string())
            }
            SocialError::Store(_) => Self::Internal(err.to_string()),
        }
    }
}
