//! Session token transport.
//!
//! API clients send the token as `Authorization: Bearer <jwt>`. The browser UI
//! relies on the HttpOnly `kosera_token` cookie set at login instead, so the guard
//! accepts either. The header wins when both are present.

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap, HeaderValue,
};
use chrono::{DateTime, Utc};

use crate::server::error::AppError;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "kosera_token";

/// Extracts the session token from the request headers.
///
/// # Returns
/// - `Some(token)` - Bearer token, or the `kosera_token` cookie when no bearer header is sent
/// - `None` - Neither is present
pub fn read_token(headers: &HeaderMap) -> Option<String> {
    bearer_token(headers).or_else(|| cookie_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, value)| *name == TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Builds the `Set-Cookie` value that stores `token` until `expires_at`.
pub fn token_cookie(token: &str, expires_at: DateTime<Utc>) -> Result<HeaderValue, AppError> {
    let max_age = (expires_at - Utc::now()).num_seconds().max(0);

    HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        TOKEN_COOKIE, token, max_age
    ))
    .map_err(|e| AppError::InternalError(format!("Invalid session cookie: {}", e)))
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_token_cookie() -> HeaderValue {
    HeaderValue::from_static("kosera_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
