//! Listing search, detail and management.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::api::PageRequest,
    server::{
        data::{favorite::FavoriteRepository, kos::KosRepository, photo::PhotoRepository},
        error::AppError,
        model::{
            kos::{CreateKosParam, Kos, KosDetail, KosFilter, KosListing, UpdateKosParam},
            user::User,
        },
    },
};

pub struct KosService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KosService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches active listings and enriches them for display.
    pub async fn search(
        &self,
        filter: &KosFilter,
        page: PageRequest,
    ) -> Result<(Vec<KosListing>, u64), AppError> {
        let repo = KosRepository::new(self.db);

        let (kos, total) = repo.search(filter, page).await?;
        let listings = repo.into_listings(kos).await?;

        Ok((listings, total))
    }

    /// Gets one listing with photos and counts the view.
    ///
    /// # Returns
    /// - `Ok(KosDetail)` - Listing with `view_count` including this view
    /// - `Err(AppError::NotFound)` - No such kos, or it was deleted
    pub async fn get_detail(&self, id: i32, viewer: Option<&User>) -> Result<KosDetail, AppError> {
        let repo = KosRepository::new(self.db);

        let mut kos = self.find_active(id).await?;
        repo.increment_view_count(kos.post_id).await?;
        kos.view_count += 1;

        let is_favorited = match viewer {
            Some(user) => FavoriteRepository::new(self.db).exists(user.id, id).await?,
            None => false,
        };
        let photos = PhotoRepository::new(self.db).list_by_kos(id).await?;
        let listing = repo
            .into_listings(vec![kos])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Listing {} vanished", id)))?;

        Ok(KosDetail {
            listing,
            photos,
            is_favorited,
        })
    }

    pub async fn create(&self, param: CreateKosParam) -> Result<KosListing, AppError> {
        check_rooms(param.total_rooms, param.occupied_rooms)?;

        let txn = self.db.begin().await?;
        let kos = KosRepository::new(&txn).create(param).await?;
        txn.commit().await?;

        tracing::info!("Kos {} created by user {}", kos.id, kos.owner_id);

        self.listing(kos).await
    }

    /// Updates a listing owned by `actor`, or any listing for admins.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        param: UpdateKosParam,
    ) -> Result<KosListing, AppError> {
        let txn = self.db.begin().await?;
        let repo = KosRepository::new(&txn);

        let kos = repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        ensure_can_manage(actor, &kos)?;
        check_rooms(
            param.total_rooms.unwrap_or(kos.total_rooms),
            param.occupied_rooms.unwrap_or(kos.occupied_rooms),
        )?;

        let kos = repo.update(id, param).await?.ok_or_else(|| not_found(id))?;
        txn.commit().await?;

        self.listing(kos).await
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let kos = self.find_active(id).await?;
        ensure_can_manage(actor, &kos)?;

        if !KosRepository::new(self.db)
            .soft_delete(kos.post_id, actor.id)
            .await?
        {
            return Err(not_found(id));
        }

        tracing::info!("Kos {} deleted by user {}", id, actor.id);

        Ok(())
    }

    /// Loads an active listing or fails with `NotFound`.
    pub async fn find_active(&self, id: i32) -> Result<Kos, AppError> {
        KosRepository::new(self.db)
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn listing(&self, kos: Kos) -> Result<KosListing, AppError> {
        let id = kos.id;
        KosRepository::new(self.db)
            .into_listings(vec![kos])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Listing {} vanished", id)))
    }
}

pub(crate) fn ensure_can_manage(actor: &User, kos: &Kos) -> Result<(), AppError> {
    if kos.can_manage(actor) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only the owner of this kos can manage it".to_string(),
        ))
    }
}

pub(crate) fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Kos {} not found", id))
}

fn check_rooms(total_rooms: i32, occupied_rooms: i32) -> Result<(), AppError> {
    if total_rooms < 1 {
        return Err(AppError::BadRequest(
            "total_rooms must be at least 1".to_string(),
        ));
    }
    if occupied_rooms < 0 || occupied_rooms > total_rooms {
        return Err(AppError::BadRequest(
            "occupied_rooms must be between 0 and total_rooms".to_string(),
        ));
    }

    Ok(())
}
