use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Seller,
    Renter,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Seller => "SELLER",
            Self::Renter => "RENTER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "SELLER" => Some(Self::Seller),
            "RENTER" => Some(Self::Renter),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub contact: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Usernames are 3 to 50 characters of ASCII letters, digits, `_` or `.`.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("username")
            .with_message("Username may only contain letters, digits, '_' and '.'".into()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RegisterDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 chars"))]
    pub name: String,
    #[validate(
        length(min = 3, max = 50, message = "Username must be between 3 and 50 chars"),
        custom(function = "validate_username")
    )]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 chars"))]
    pub password: String,
    #[validate(length(max = 30, message = "Contact must be at most 30 chars"))]
    pub contact: Option<String>,
    /// `RENTER` when omitted. `ADMIN` is rejected.
    pub role: Option<UserRole>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LoginDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AuthResponseDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ChangePasswordDto {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub old_password: String,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 chars"))]
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 chars"))]
    pub name: Option<String>,
    #[validate(length(max = 30, message = "Contact must be at most 30 chars"))]
    pub contact: Option<String>,
    /// Only admins may change roles.
    pub role: Option<UserRole>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, Validate)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct UserListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Matches name or username.
    #[validate(length(max = 100))]
    pub q: Option<String>,
    pub role: Option<UserRole>,
    pub include_deleted: Option<bool>,
}
