use crate::model::user::{UserDto, UserRole};

/// Session shared through context, filled once `/api/auth/me` has answered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Whether the initial session lookup has finished.
    pub fetched: bool,
}

impl UserState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(UserRole::Admin)
    }

    /// Sellers and admins may publish listings.
    pub fn can_sell(&self) -> bool {
        matches!(self.role(), Some(UserRole::Seller | UserRole::Admin))
    }
}
