use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request had no `Authorization` header.
    #[error("Authorization header missing")]
    MissingHeader,

    /// `Authorization` header present but not of the form `Bearer <token>`.
    #[error("Invalid authorization format. Expected Bearer token")]
    InvalidHeaderFormat,

    /// `Bearer ` prefix followed by nothing.
    #[error("Token is empty")]
    EmptyToken,

    /// Token signature is valid but `exp` has passed.
    #[error("Token has expired")]
    TokenExpired,

    /// Token could not be decoded or its signature does not verify.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Login with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the role or ownership an operation requires.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Description of what was attempted, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Token refers to a user that no longer exists.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),
}

impl AuthError {
    /// Stable machine-readable code sent alongside 401 responses.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::MissingHeader => Some("MISSING_AUTH_HEADER"),
            Self::InvalidHeaderFormat => Some("INVALID_AUTH_FORMAT"),
            Self::EmptyToken => Some("EMPTY_TOKEN"),
            Self::TokenExpired => Some("TOKEN_EXPIRED"),
            Self::InvalidToken(_) => Some("INVALID_TOKEN"),
            Self::InvalidCredentials => Some("INVALID_CREDENTIALS"),
            Self::AccessDenied(..) | Self::UserNotInDatabase(_) => None,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Credential defects are logged at debug level and returned as 401 with a cause code.
/// Token decoding details stay in the logs.
///
/// # Returns
/// - 401 Unauthorized - Missing, malformed, empty, expired or invalid credentials
/// - 403 Forbidden - `AccessDenied`
/// - 404 Not Found - `UserNotInDatabase`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied(..) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Access denied. Insufficient permissions")),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new("User not found"))).into_response()
            }
            Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::with_code("Invalid token", "INVALID_TOKEN")),
            )
                .into_response(),
            err => {
                let code = err.code().unwrap_or("AUTH_FAILED");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::with_code(err.to_string(), code)),
                )
                    .into_response()
            }
        }
    }
}
