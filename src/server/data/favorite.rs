//! Favorite repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::api::PageRequest,
    server::{
        data::kos::KosRepository,
        model::favorite::{Favorite, FavoriteListing},
    },
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, kos_id: i32) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kos_id: ActiveValue::Set(kos_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Removes the favorite of `user_id` on `kos_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - A favorite was removed
    /// - `Ok(false)` - The user had not favorited that kos
    pub async fn delete(&self, user_id: i32, kos_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::KosId.eq(kos_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, user_id: i32, kos_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::KosId.eq(kos_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the user's favorites on active listings, most recent first.
    ///
    /// # Returns
    /// - `Ok((favorites, total))` - Favorites with their listings and the total count
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<(Vec<FavoriteListing>, u64), DbErr> {
        let paginator = entity::prelude::Favorite::find()
            .inner_join(entity::prelude::Kos)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(
                entity::kos::Column::PostId.in_subquery(
                    Query::select()
                        .column(entity::post::Column::Id)
                        .from(entity::post::Entity)
                        .and_where(entity::post::Column::DeletedAt.is_null())
                        .to_owned(),
                ),
            )
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let favorites: Vec<Favorite> = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Favorite::from_entity)
            .collect();

        let kos_repo = KosRepository::new(self.db);
        let mut kos = kos_repo
            .find_many(favorites.iter().map(|f| f.kos_id).collect())
            .await?;
        let ordered = favorites
            .iter()
            .map(|f| {
                kos.remove(&f.kos_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Kos {} for favorite {} is missing",
                        f.kos_id, f.id
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let listings = kos_repo.into_listings(ordered).await?;

        let items = favorites
            .into_iter()
            .zip(listings)
            .map(|(favorite, listing)| FavoriteListing { favorite, listing })
            .collect();

        Ok((items, total))
    }
}
