//! User domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::user::{UpdateUserDto, UserDto, UserListQuery, UserRole};

/// Account with role and soft-delete state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub contact: Option<String>,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role is not one of `ADMIN`, `SELLER`, `RENTER`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = UserRole::parse(&entity.role).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown role '{}' stored for user {}",
                entity.role, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            username: entity.username,
            contact: entity.contact,
            password_hash: entity.password_hash,
            role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            username: self.username,
            contact: self.contact,
            role: self.role,
            created_at: self.created_at,
            deleted_at: self.deleted_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Parameters for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub username: String,
    pub contact: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
}

/// Partial profile update. `None` leaves a field unchanged; an empty contact clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub role: Option<UserRole>,
}

impl From<UpdateUserDto> for UpdateUserParam {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            contact: dto.contact.map(|contact| contact.trim().to_string()),
            role: dto.role,
        }
    }
}

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring of name or username.
    pub q: Option<String>,
    pub role: Option<UserRole>,
    pub include_deleted: bool,
}

impl From<UserListQuery> for UserFilter {
    fn from(query: UserListQuery) -> Self {
        Self {
            q: query
                .q
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            role: query.role,
            include_deleted: query.include_deleted.unwrap_or(false),
        }
    }
}
