//! Review repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::api::PageRequest, server::model::review::Review};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        kos_id: i32,
        rating: i32,
        comment: Option<String>,
    ) -> Result<Review, DbErr> {
        let now = Utc::now();
        let entity = entity::review::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kos_id: ActiveValue::Set(kos_id),
            rating: ActiveValue::Set(rating),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_author(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let Some(entity) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        self.with_author(entity).await.map(Some)
    }

    pub async fn exists_for_user(&self, user_id: i32, kos_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(entity::review::Column::KosId.eq(kos_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces rating and, when given, the comment of a review.
    pub async fn update(
        &self,
        id: i32,
        rating: Option<i32>,
        comment: Option<String>,
    ) -> Result<Option<Review>, DbErr> {
        let Some(entity) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::review::ActiveModel = entity.into();
        if let Some(rating) = rating {
            active.rating = ActiveValue::Set(rating);
        }
        if let Some(comment) = comment {
            let comment = comment.trim().to_string();
            active.comment = ActiveValue::Set((!comment.is_empty()).then_some(comment));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        self.with_author(entity).await.map(Some)
    }

    /// # Returns
    /// - `Ok(true)` - Review was deleted
    /// - `Ok(false)` - No review with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets reviews of a kos, newest first.
    pub async fn get_paginated_by_kos(
        &self,
        kos_id: i32,
        page: PageRequest,
    ) -> Result<(Vec<Review>, u64), DbErr> {
        let paginator = entity::prelude::Review::find()
            .filter(entity::review::Column::KosId.eq(kos_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        let author_ids: Vec<i32> = entities.iter().map(|r| r.user_id).collect();
        let authors: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let reviews = entities
            .into_iter()
            .map(|review| {
                let author = authors.get(&review.user_id).ok_or_else(|| missing_author(&review))?;
                Ok(Review::from_entity(review, author))
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok((reviews, total))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Review::find().count(self.db).await
    }

    async fn with_author(&self, review: entity::review::Model) -> Result<Review, DbErr> {
        let author = entity::prelude::User::find_by_id(review.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| missing_author(&review))?;

        Ok(Review::from_entity(review, &author))
    }
}

fn missing_author(review: &entity::review::Model) -> DbErr {
    DbErr::RecordNotFound(format!(
        "Author {} of review {} is missing",
        review.user_id, review.id
    ))
}
