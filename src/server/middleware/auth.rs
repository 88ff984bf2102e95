use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        auth::jwt::{verify_session_token, TokenSettings},
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::read_token,
        model::user::User,
    },
};

pub enum Permission {
    Admin,
    /// Sellers and admins.
    Seller,
}

/// Authenticates the caller of a request from its session token.
///
/// The token only identifies the user; the role and deleted state are re-read
/// from the database on every request so role changes and deletions apply
/// immediately.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenSettings,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenSettings, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires an authenticated user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AuthError::MissingToken)` - No token sent
    /// - `Err(AuthError::InvalidToken)` - Token malformed, tampered or expired
    /// - `Err(AuthError::UserNotFound)` - User deleted since the token was issued
    /// - `Err(AuthError::AccessDenied)` - A permission is not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = read_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user = self.authenticate(&token).await?;

        for permission in permissions {
            let granted = match permission {
                Permission::Admin => user.is_admin(),
                Permission::Seller => matches!(user.role, UserRole::Seller | UserRole::Admin),
            };
            if !granted {
                return Err(AuthError::AccessDenied.into());
            }
        }

        Ok(user)
    }

    /// Identifies the caller on public endpoints.
    ///
    /// A missing or unusable token yields `None` rather than an error so an
    /// expired cookie never locks a visitor out of public pages.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(token) = read_token(self.headers) else {
            return Ok(None);
        };

        match self.authenticate(&token).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(AuthError::InvalidToken | AuthError::UserNotFound(_))) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = verify_session_token(token, self.tokens)?;

        let user = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .filter(|user| !user.is_deleted())
            .ok_or(AuthError::UserNotFound(claims.sub))?;

        Ok(user)
    }
}
