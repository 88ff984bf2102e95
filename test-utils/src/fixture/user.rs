//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

pub const DEFAULT_NAME: &str = "Test User";
pub const DEFAULT_USERNAME: &str = "testuser";
pub const DEFAULT_ROLE: &str = "RENTER";

/// Creates a renter entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test User"`
/// - username: `"testuser"`
/// - role: `"RENTER"`
/// - created_at / updated_at: 2026-01-01T00:00:00Z
pub fn entity() -> user::Model {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    user::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        username: DEFAULT_USERNAME.to_string(),
        contact: None,
        password_hash: crate::factory::user::UNUSABLE_PASSWORD_HASH.to_string(),
        role: DEFAULT_ROLE.to_string(),
        created_at: at,
        updated_at: at,
        deleted_at: None,
        deleted_by: None,
    }
}

/// Creates a user entity model with the given stored role string.
pub fn entity_with_role(role: &str) -> user::Model {
    user::Model {
        role: role.to_string(),
        ..entity()
    }
}
