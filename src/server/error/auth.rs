use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token or session cookie was sent with the request.
    #[error("Authentication required")]
    MissingToken,

    /// Token failed signature, expiry or claim validation.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Username unknown, password mismatch or user soft-deleted.
    ///
    /// One variant for all three so responses do not reveal which usernames exist.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Token was valid but the user it names no longer exists or was deleted.
    #[error("User {0} no longer exists")]
    UserNotFound(i32),

    /// Authenticated user lacks the role the endpoint requires.
    #[error("You do not have permission to access this resource")]
    AccessDenied,

    /// Signing key problems and other failures unrelated to the caller's input.
    #[error("Token handling failed: {0}")]
    TokenFailure(String),

    /// Argon2 hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    HashFailure(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` / `UserNotFound` → 401 `unauthorized`
/// - `AccessDenied` → 403 `forbidden`
/// - `TokenFailure` / `HashFailure` → 500 `internal_error`, detail logged only
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "unauthorized", self.to_string())
            }
            Self::UserNotFound(user_id) => {
                tracing::debug!("Token references missing user {}", user_id);
                error_response(
                    StatusCode::UNAUTHORIZED,
                    "unauthorized",
                    "Invalid or expired token",
                )
            }
            Self::AccessDenied => {
                error_response(StatusCode::FORBIDDEN, "forbidden", self.to_string())
            }
            Self::TokenFailure(_) | Self::HashFailure(_) => {
                tracing::error!("{}", self);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        }
    }
}
