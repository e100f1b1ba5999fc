//! Domain outcomes and their transport mapping.

use axum::{http::StatusCode, response::IntoResponse};

/// Closed set of results a handler may return, distinct from the status code
/// it maps to. `Conflict` and `InvalidCredentials` are expected business
/// outcomes, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Conflict,
    Authenticated,
    InvalidCredentials,
    InvalidRequest,
    StorageError,
}

impl Outcome {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::Created | Self::Authenticated => StatusCode::OK,
            Self::Conflict => StatusCode::CONFLICT,
            // 401 instead of the upstream 502-style mapping
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Created => "User created",
            Self::Conflict => "User already exists",
            Self::Authenticated => "Login successful",
            Self::InvalidCredentials => "Unauthorized",
            Self::InvalidRequest => "Invalid request",
            Self::StorageError => "Storage error",
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> axum::response::Response {
        (self.status(), self.message().to_string()).into_response()
    }
}
