//! Kos photos: CDN uploads, external URLs and the primary photo.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::CdnConfig,
    data::{kos::KosRepository, photo::PhotoRepository},
    error::{integration::IntegrationError, AppError},
    integration::cdn::{self, CdnClient},
    model::{
        kos::Kos,
        photo::{CreatePhotoParam, Photo},
        user::User,
    },
    service::kos::{ensure_can_manage, not_found as kos_not_found},
};

pub const MAX_PHOTOS_PER_KOS: u64 = 10;

/// An image file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
    http: &'a reqwest::Client,
    cdn: Option<&'a CdnConfig>,
}

impl<'a> PhotoService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http: &'a reqwest::Client,
        cdn: Option<&'a CdnConfig>,
    ) -> Self {
        Self { db, http, cdn }
    }

    pub async fn list(&self, kos_id: i32) -> Result<Vec<Photo>, AppError> {
        self.active_kos(kos_id).await?;

        Ok(PhotoRepository::new(self.db).list_by_kos(kos_id).await?)
    }

    /// Uploads an image to the CDN and records it.
    ///
    /// # Returns
    /// - `Err(IntegrationError::CdnNotConfigured)` - No CDN credentials
    /// - `Err(AppError::BadRequest)` - Empty, too large or unsupported file, or photo limit reached
    /// - `Err(IntegrationError)` - Upload failed upstream
    pub async fn upload(
        &self,
        actor: &User,
        kos_id: i32,
        upload: PhotoUpload,
    ) -> Result<Photo, AppError> {
        let config = self.cdn.ok_or(IntegrationError::CdnNotConfigured)?;

        let kos = self.active_kos(kos_id).await?;
        ensure_can_manage(actor, &kos)?;
        self.ensure_capacity(kos_id).await?;

        if upload.bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if upload.bytes.len() > cdn::MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest(format!(
                "File exceeds the {} MiB limit",
                cdn::MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }
        let content_type = cdn::accepted_content_type(upload.content_type.as_deref())
            .ok_or_else(|| {
                AppError::BadRequest("Only JPEG, PNG and WebP images are accepted".to_string())
            })?;

        let uploaded = CdnClient::new(self.http, config)
            .upload(upload.bytes, upload.file_name, content_type)
            .await?;

        let photo = self
            .record(CreatePhotoParam {
                kos_id,
                url: uploaded.secure_url,
                public_id: Some(uploaded.public_id),
                is_primary: false,
            })
            .await?;

        tracing::info!("Photo {} uploaded for kos {}", photo.id, kos_id);

        Ok(photo)
    }

    /// Attaches an externally hosted image by URL.
    pub async fn add_url(
        &self,
        actor: &User,
        kos_id: i32,
        url: String,
        is_primary: bool,
    ) -> Result<Photo, AppError> {
        let kos = self.active_kos(kos_id).await?;
        ensure_can_manage(actor, &kos)?;
        self.ensure_capacity(kos_id).await?;

        self.record(CreatePhotoParam {
            kos_id,
            url,
            public_id: None,
            is_primary,
        })
        .await
    }

    pub async fn set_primary(&self, actor: &User, photo_id: i32) -> Result<Photo, AppError> {
        let photo = self.find(photo_id).await?;
        let kos = self.active_kos(photo.kos_id).await?;
        ensure_can_manage(actor, &kos)?;

        let repo = PhotoRepository::new(self.db);
        repo.set_primary(kos.id, photo.id).await?;

        Ok(Photo {
            is_primary: true,
            ..photo
        })
    }

    /// Deletes a photo, promoting the oldest remaining one if it was primary.
    ///
    /// The CDN asset is destroyed after the row is gone; a failure there is logged
    /// and does not fail the request.
    pub async fn delete(&self, actor: &User, photo_id: i32) -> Result<(), AppError> {
        let photo = self.find(photo_id).await?;
        let kos = KosRepository::new(self.db)
            .find_by_id(photo.kos_id)
            .await?
            .ok_or_else(|| kos_not_found(photo.kos_id))?;
        ensure_can_manage(actor, &kos)?;

        let txn = self.db.begin().await?;
        let repo = PhotoRepository::new(&txn);
        repo.delete(photo.id).await?;
        if photo.is_primary {
            repo.promote_oldest(photo.kos_id).await?;
        }
        txn.commit().await?;

        if let (Some(public_id), Some(config)) = (photo.public_id.as_deref(), self.cdn) {
            if let Err(err) = CdnClient::new(self.http, config).destroy(public_id).await {
                tracing::warn!("Failed to delete CDN asset {}: {}", public_id, err);
            }
        }

        Ok(())
    }

    /// Inserts the photo row. The first photo of a kos always becomes primary.
    async fn record(&self, param: CreatePhotoParam) -> Result<Photo, AppError> {
        let txn = self.db.begin().await?;
        let repo = PhotoRepository::new(&txn);

        let first = repo.count_by_kos(param.kos_id).await? == 0;
        let make_primary = param.is_primary || first;
        let kos_id = param.kos_id;

        let photo = repo
            .create(CreatePhotoParam {
                is_primary: make_primary,
                ..param
            })
            .await?;
        if make_primary && !first {
            repo.set_primary(kos_id, photo.id).await?;
        }
        txn.commit().await?;

        Ok(photo)
    }

    async fn ensure_capacity(&self, kos_id: i32) -> Result<(), AppError> {
        let count = PhotoRepository::new(self.db).count_by_kos(kos_id).await?;
        if count >= MAX_PHOTOS_PER_KOS {
            return Err(AppError::BadRequest(format!(
                "A kos can have at most {} photos",
                MAX_PHOTOS_PER_KOS
            )));
        }

        Ok(())
    }

    async fn active_kos(&self, kos_id: i32) -> Result<Kos, AppError> {
        KosRepository::new(self.db)
            .find_active_by_id(kos_id)
            .await?
            .ok_or_else(|| kos_not_found(kos_id))
    }

    async fn find(&self, photo_id: i32) -> Result<Photo, AppError> {
        PhotoRepository::new(self.db)
            .find_by_id(photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Photo {} not found", photo_id)))
    }
}
