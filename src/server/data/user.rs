//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::{api::PageRequest, user::UserRole},
    server::model::user::{CreateUserParam, UpdateUserParam, User, UserFilter},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            username: ActiveValue::Set(param.username),
            contact: ActiveValue::Set(param.contact),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            deleted_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id, including soft-deleted users.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by exact username, including soft-deleted users.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks whether any active (not deleted) admin exists.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .filter(entity::user::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(contact) = param.contact {
            let contact = contact.trim().to_string();
            active.contact = ActiveValue::Set((!contact.is_empty()).then_some(contact));
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        User::from_entity(entity).map(Some)
    }

    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update(entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password_hash: ActiveValue::Set(password_hash),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Marks an active user as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - User was active and is now deleted
    /// - `Ok(false)` - No such user, or already deleted
    pub async fn soft_delete(&self, id: i32, deleted_by: i32) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::DeletedAt, sea_orm::sea_query::Expr::value(now))
            .col_expr(
                entity::user::Column::DeletedBy,
                sea_orm::sea_query::Expr::value(deleted_by),
            )
            .col_expr(entity::user::Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears the deleted marker on a soft-deleted user.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted and is now active
    /// - `Ok(false)` - No such user, or not deleted
    pub async fn restore(&self, id: i32) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_not_null())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.deleted_at = ActiveValue::Set(None);
        active.deleted_by = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(true)
    }

    /// Gets users matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total matching count
    pub async fn get_paginated(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(q) = &filter.q {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Name.contains(q))
                    .add(entity::user::Column::Username.contains(q)),
            );
        }
        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }
        if !filter.include_deleted {
            query = query.filter(entity::user::Column::DeletedAt.is_null());
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }
}
