//! Favorites and the post favorite counter.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::api::PageRequest,
    server::{
        data::{
            favorite::FavoriteRepository,
            kos::{KosRepository, PostCounter},
        },
        error::AppError,
        model::{favorite::FavoriteListing, user::User},
        service::kos::not_found as kos_not_found,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        user: &User,
        page: PageRequest,
    ) -> Result<(Vec<FavoriteListing>, u64), AppError> {
        Ok(FavoriteRepository::new(self.db)
            .get_paginated_by_user(user.id, page)
            .await?)
    }

    /// Favorites a kos and bumps its favorite counter.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Kos missing or deleted
    /// - `Err(AppError::Conflict)` - Already favorited
    pub async fn add(&self, user: &User, kos_id: i32) -> Result<FavoriteListing, AppError> {
        let txn = self.db.begin().await?;
        let kos_repo = KosRepository::new(&txn);
        let favorite_repo = FavoriteRepository::new(&txn);

        let mut kos = kos_repo
            .find_active_by_id(kos_id)
            .await?
            .ok_or_else(|| kos_not_found(kos_id))?;
        if favorite_repo.exists(user.id, kos_id).await? {
            return Err(AppError::Conflict(
                "This kos is already in your favorites".to_string(),
            ));
        }

        let favorite = favorite_repo.create(user.id, kos_id).await?;
        kos_repo
            .adjust_counter(kos.post_id, PostCounter::Favorite, 1)
            .await?;
        kos.favorite_count += 1;

        let listing = kos_repo
            .into_listings(vec![kos])
            .await?
            .pop()
            .ok_or_else(|| kos_not_found(kos_id))?;
        txn.commit().await?;

        Ok(FavoriteListing { favorite, listing })
    }

    /// Removes a favorite and decrements the counter.
    pub async fn remove(&self, user: &User, kos_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let kos_repo = KosRepository::new(&txn);

        if !FavoriteRepository::new(&txn).delete(user.id, kos_id).await? {
            return Err(AppError::NotFound(
                "This kos is not in your favorites".to_string(),
            ));
        }
        if let Some(kos) = kos_repo.find_by_id(kos_id).await? {
            kos_repo
                .adjust_counter(kos.post_id, PostCounter::Favorite, -1)
                .await?;
        }
        txn.commit().await?;

        Ok(())
    }
}
