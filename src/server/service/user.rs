//! User administration and profile updates.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::api::PageRequest,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{UpdateUserParam, User, UserFilter},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<(Vec<User>, u64), AppError> {
        Ok(UserRepository::new(self.db).get_paginated(filter, page).await?)
    }

    /// Gets a user the caller is allowed to see: themselves, or anyone for admins.
    pub async fn get(&self, actor: &User, id: i32) -> Result<User, AppError> {
        if actor.id != id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "You can only view your own profile".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Updates a profile. Only admins may change roles.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        param: UpdateUserParam,
    ) -> Result<User, AppError> {
        if actor.id != id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "You can only edit your own profile".to_string(),
            ));
        }
        if param.role.is_some() && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Only admins can change roles".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Soft-deletes a user. Admins cannot delete themselves.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        if actor.id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        if !repo.soft_delete(id, actor.id).await? {
            return Err(AppError::Conflict(format!("User {} is already deleted", id)));
        }

        tracing::info!("User {} deleted by admin {}", id, actor.id);

        Ok(())
    }

    pub async fn restore(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let Some(user) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        };
        if !user.is_deleted() {
            return Err(AppError::Conflict(format!("User {} is not deleted", id)));
        }

        repo.restore(id).await?;

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }
}
