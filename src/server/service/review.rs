//! Reviews and the post review counter.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::api::PageRequest,
    server::{
        data::{
            kos::{KosRepository, PostCounter},
            review::ReviewRepository,
        },
        error::AppError,
        model::{review::Review, user::User},
        service::kos::not_found as kos_not_found,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated_by_kos(
        &self,
        kos_id: i32,
        page: PageRequest,
    ) -> Result<(Vec<Review>, u64), AppError> {
        if KosRepository::new(self.db)
            .find_active_by_id(kos_id)
            .await?
            .is_none()
        {
            return Err(kos_not_found(kos_id));
        }

        Ok(ReviewRepository::new(self.db)
            .get_paginated_by_kos(kos_id, page)
            .await?)
    }

    /// Adds the caller's review of a kos and bumps its review counter.
    ///
    /// # Returns
    /// - `Err(AppError::Forbidden)` - Caller owns the kos
    /// - `Err(AppError::Conflict)` - Caller already reviewed it
    pub async fn create(
        &self,
        actor: &User,
        kos_id: i32,
        rating: i32,
        comment: Option<String>,
    ) -> Result<Review, AppError> {
        let txn = self.db.begin().await?;
        let kos_repo = KosRepository::new(&txn);
        let review_repo = ReviewRepository::new(&txn);

        let kos = kos_repo
            .find_active_by_id(kos_id)
            .await?
            .ok_or_else(|| kos_not_found(kos_id))?;
        if kos.owner_id == actor.id {
            return Err(AppError::Forbidden(
                "You cannot review your own kos".to_string(),
            ));
        }
        if review_repo.exists_for_user(actor.id, kos_id).await? {
            return Err(AppError::Conflict(
                "You have already reviewed this kos".to_string(),
            ));
        }

        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let review = review_repo.create(actor.id, kos_id, rating, comment).await?;
        kos_repo
            .adjust_counter(kos.post_id, PostCounter::Review, 1)
            .await?;
        txn.commit().await?;

        Ok(review)
    }

    /// Edits a review. Authors may edit their own; admins any.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        rating: Option<i32>,
        comment: Option<String>,
    ) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        let review = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        ensure_author(actor, &review)?;

        repo.update(id, rating, comment)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a review and decrements the review counter of its kos.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let review_repo = ReviewRepository::new(&txn);
        let kos_repo = KosRepository::new(&txn);

        let review = review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        ensure_author(actor, &review)?;

        review_repo.delete(id).await?;
        if let Some(kos) = kos_repo.find_by_id(review.kos_id).await? {
            kos_repo
                .adjust_counter(kos.post_id, PostCounter::Review, -1)
                .await?;
        }
        txn.commit().await?;

        Ok(())
    }
}

fn ensure_author(actor: &User, review: &Review) -> Result<(), AppError> {
    if actor.is_admin() || review.user_id == actor.id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only the author can change this review".to_string(),
        ))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Review {} not found", id))
}
