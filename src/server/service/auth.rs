//! Registration, login and password management.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{AuthResponseDto, UserRole},
    server::{
        auth::{
            jwt::{create_session_token, TokenSettings},
            password::{hash_password, verify_password},
        },
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, User},
    },
};

/// A freshly issued session token together with its user.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl IssuedSession {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            token: self.token,
            expires_at: self.expires_at,
            user: self.user.into_dto(),
        }
    }
}

/// Account details submitted at registration, password still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub username: String,
    pub password: String,
    pub contact: Option<String>,
    pub role: UserRole,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenSettings,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenSettings) -> Self {
        Self { db, tokens }
    }

    /// Creates a renter or seller account and signs it in.
    ///
    /// # Returns
    /// - `Ok(IssuedSession)` - New user and token
    /// - `Err(AppError::BadRequest)` - Requested role is `ADMIN`
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn register(&self, param: RegisterParam) -> Result<IssuedSession, AppError> {
        if param.role == UserRole::Admin {
            return Err(AppError::BadRequest(
                "Only RENTER or SELLER accounts can be registered".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        if repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already taken",
                param.username
            )));
        }

        let user = repo
            .create(CreateUserParam {
                name: param.name.trim().to_string(),
                username: param.username,
                contact: param
                    .contact
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty()),
                password_hash: hash_password(&param.password)?,
                role: param.role,
            })
            .await?;

        tracing::info!("Registered {} account {}", user.role, user.username);

        self.issue(user)
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown usernames, wrong passwords and deleted accounts all fail with the
    /// same `InvalidCredentials` error.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .filter(|user| !user.is_deleted())
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue(user)
    }

    pub async fn change_password(
        &self,
        user: &User,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if !verify_password(old_password, &user.password_hash)? {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .update_password(user.id, hash_password(new_password)?)
            .await?;

        Ok(())
    }

    fn issue(&self, user: User) -> Result<IssuedSession, AppError> {
        let (token, expires_at) = create_session_token(&user, self.tokens)?;

        Ok(IssuedSession {
            user,
            token,
            expires_at,
        })
    }
}

/// Creates the initial admin account when no active admin exists.
///
/// # Returns
/// - `Ok(Some(User))` - Admin was created
/// - `Ok(None)` - An admin already exists or the username is taken
pub async fn seed_admin(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Option<User>, AppError> {
    let repo = UserRepository::new(db);
    if repo.admin_exists().await? || repo.find_by_username(username).await?.is_some() {
        return Ok(None);
    }

    let user = repo
        .create(CreateUserParam {
            name: "Administrator".to_string(),
            username: username.to_string(),
            contact: None,
            password_hash: hash_password(password)?,
            role: UserRole::Admin,
        })
        .await?;

    Ok(Some(user))
}
