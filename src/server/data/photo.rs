//! Kos photo repository.
//!
//! Callers keep the one-primary-per-kos invariant by running [`PhotoRepository::set_primary`]
//! and [`PhotoRepository::promote_oldest`] in the same transaction as the insert or delete.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::photo::{CreatePhotoParam, Photo};

pub struct PhotoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhotoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePhotoParam) -> Result<Photo, DbErr> {
        let entity = entity::kos_photo::ActiveModel {
            kos_id: ActiveValue::Set(param.kos_id),
            url: ActiveValue::Set(param.url),
            public_id: ActiveValue::Set(param.public_id),
            is_primary: ActiveValue::Set(param.is_primary),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Photo::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Photo>, DbErr> {
        Ok(entity::prelude::KosPhoto::find_by_id(id)
            .one(self.db)
            .await?
            .map(Photo::from_entity))
    }

    /// Photos of a kos, primary first then oldest first.
    pub async fn list_by_kos(&self, kos_id: i32) -> Result<Vec<Photo>, DbErr> {
        Ok(entity::prelude::KosPhoto::find()
            .filter(entity::kos_photo::Column::KosId.eq(kos_id))
            .order_by_desc(entity::kos_photo::Column::IsPrimary)
            .order_by_asc(entity::kos_photo::Column::CreatedAt)
            .order_by_asc(entity::kos_photo::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Photo::from_entity)
            .collect())
    }

    pub async fn count_by_kos(&self, kos_id: i32) -> Result<u64, DbErr> {
        entity::prelude::KosPhoto::find()
            .filter(entity::kos_photo::Column::KosId.eq(kos_id))
            .count(self.db)
            .await
    }

    /// Makes `photo_id` the only primary photo of `kos_id`.
    pub async fn set_primary(&self, kos_id: i32, photo_id: i32) -> Result<(), DbErr> {
        entity::prelude::KosPhoto::update_many()
            .col_expr(entity::kos_photo::Column::IsPrimary, Expr::value(false))
            .filter(entity::kos_photo::Column::KosId.eq(kos_id))
            .filter(entity::kos_photo::Column::Id.ne(photo_id))
            .exec(self.db)
            .await?;

        entity::prelude::KosPhoto::update_many()
            .col_expr(entity::kos_photo::Column::IsPrimary, Expr::value(true))
            .filter(entity::kos_photo::Column::Id.eq(photo_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// # Returns
    /// - `Ok(true)` - Photo was deleted
    /// - `Ok(false)` - No photo with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::KosPhoto::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks the oldest photo of `kos_id` as primary.
    ///
    /// # Returns
    /// - `Ok(Some(photo_id))` - The promoted photo
    /// - `Ok(None)` - The kos has no photos left
    pub async fn promote_oldest(&self, kos_id: i32) -> Result<Option<i32>, DbErr> {
        let Some(oldest) = entity::prelude::KosPhoto::find()
            .filter(entity::kos_photo::Column::KosId.eq(kos_id))
            .order_by_asc(entity::kos_photo::Column::CreatedAt)
            .order_by_asc(entity::kos_photo::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.set_primary(kos_id, oldest.id).await?;
        Ok(Some(oldest.id))
    }
}
