//! JWT session token creation and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::user::UserRole,
    server::{error::auth::AuthError, model::user::User},
};

/// Signing secret and lifetime for session tokens.
#[derive(Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub expiry: Duration,
}

impl TokenSettings {
    pub fn new(secret: impl Into<String>, expiry_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry: Duration::hours(expiry_hours),
        }
    }
}

/// JWT session claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id.
    pub sub: i32,
    pub username: String,
    /// Role at issue time. Request guards re-read the role from the database.
    pub role: UserRole,
    pub exp: i64,
    pub iat: i64,
}

/// Creates a signed token for `user`.
///
/// # Returns
/// - `Ok((token, expires_at))` - HS256 token and its expiry instant
/// - `Err(AuthError::TokenFailure)` - Encoding failed
pub fn create_session_token(
    user: &User,
    settings: &TokenSettings,
) -> Result<(String, DateTime<Utc>), AuthError> {
    let now = Utc::now();
    let expires_at = now + settings.expiry;
    let claims = SessionClaims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let key = EncodingKey::from_secret(settings.secret.as_bytes());
    let token = encode(&Header::default(), &claims, &key)
        .map_err(|e| AuthError::TokenFailure(format!("create JWT: {e}")))?;

    Ok((token, expires_at))
}

/// Verifies signature and expiry and returns the decoded claims.
///
/// Malformed, tampered and expired tokens are the caller's problem (401); key and
/// serialization failures are ours (500).
pub fn verify_session_token(token: &str, settings: &TokenSettings) -> Result<SessionClaims, AuthError> {
    let key = DecodingKey::from_secret(settings.secret.as_bytes());
    let validation = Validation::default();

    let data = decode::<SessionClaims>(token, &key, &validation).map_err(|e| match e.kind() {
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::ExpiredSignature
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::ImmatureSignature
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::InvalidAlgorithm => AuthError::InvalidToken,
        _ => AuthError::TokenFailure(format!("JWT verification: {e}")),
    })?;

    Ok(data.claims)
}
