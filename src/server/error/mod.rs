//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. Its
//! `IntoResponse` implementation renders every failure as the JSON envelope
//! `{"success": false, "error": "<code>", "message": "..."}` with the matching
//! HTTP status.

pub mod auth;
pub mod config;
pub mod integration;

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, integration::IntegrationError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. Domain-specific
/// errors like `AuthError` handle their own response mapping, while message variants
/// map to a fixed status and error code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401, 403 or 500).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client error outside the integration clients.
    ///
    /// Results in 503 Service Unavailable.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// CDN or geocoding failure. Results in 503 Service Unavailable.
    #[error(transparent)]
    IntegrationErr(#[from] IntegrationError),

    /// Request body or query failed field validation.
    ///
    /// Results in 400 `validation_error` with per-field messages in `details`.
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    /// Resource not found. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or semantically invalid request. Results in 400 `validation_error`.
    #[error("{0}")]
    BadRequest(String),

    /// Caller is authenticated but not allowed to act on this resource. Results in 403.
    #[error("{0}")]
    Forbidden(String),

    /// Request collides with existing state (duplicate, overlap, full). Results in 409.
    #[error("{0}")]
    Conflict(String),

    /// Booking status change not permitted from the current status. Results in 400.
    #[error("{0}")]
    InvalidTransition(String),

    /// Too many requests from one client. Results in 429.
    #[error("{0}")]
    RateLimited(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Builds the failure envelope response.
pub(crate) fn error_response(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(ErrorDto {
            success: false,
            error: code.to_string(),
            message: message.into(),
            details: None,
        }),
    )
        .into_response()
}

fn validation_details(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value ({})", err.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 `validation_error` - For `Validation` and `BadRequest`
/// - 400 `invalid_transition` - For `InvalidTransition`
/// - 403 `forbidden` - For `Forbidden`
/// - 404 `not_found` - For `NotFound`
/// - 409 `conflict` - For `Conflict`
/// - 429 `rate_limited` - For `RateLimited`
/// - 503 `service_unavailable` - For `IntegrationErr` and `ReqwestErr`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 `internal_error` - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    success: false,
                    error: "validation_error".to_string(),
                    message: "Request validation failed".to_string(),
                    details: Some(validation_details(&errors)),
                }),
            )
                .into_response(),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, "validation_error", msg),
            Self::InvalidTransition(msg) => {
                error_response(StatusCode::BAD_REQUEST, "invalid_transition", msg)
            }
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, "forbidden", msg),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, "not_found", msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, "conflict", msg),
            Self::RateLimited(msg) => {
                error_response(StatusCode::TOO_MANY_REQUESTS, "rate_limited", msg)
            }
            Self::IntegrationErr(IntegrationError::CdnNotConfigured) => error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                IntegrationError::CdnNotConfigured.to_string(),
            ),
            Self::IntegrationErr(err) => {
                tracing::warn!("{}", err);
                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "service_unavailable",
                    "Upstream service is unavailable, please try again later",
                )
            }
            Self::ReqwestErr(err) => {
                tracing::warn!("Outbound request failed: {}", err);
                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "service_unavailable",
                    "Upstream service is unavailable, please try again later",
                )
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "Internal server error",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn maps_variants_to_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidTransition("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::RateLimited("x".into()), StatusCode::TOO_MANY_REQUESTS),
            (
                AppError::IntegrationErr(IntegrationError::CdnNotConfigured),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::AuthErr(AuthError::MissingToken),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::AuthErr(AuthError::AccessDenied),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::DbErr(sea_orm::DbErr::Custom("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn collects_validation_details_per_field() {
        let errors = Probe {
            name: "ab".to_string(),
        }
        .validate()
        .unwrap_err();

        let details = validation_details(&errors);
        assert_eq!(details.get("name"), Some(&vec!["too short".to_string()]));
    }
}
