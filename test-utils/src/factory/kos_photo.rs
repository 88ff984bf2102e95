//! Kos photo factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test photos attached to a kos.
pub struct KosPhotoFactory<'a> {
    db: &'a DatabaseConnection,
    kos_id: i32,
    url: String,
    public_id: Option<String>,
    is_primary: bool,
}

impl<'a> KosPhotoFactory<'a> {
    /// Creates a new KosPhotoFactory with a CDN-style URL and public id.
    pub fn new(db: &'a DatabaseConnection, kos_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            kos_id,
            url: format!(
                "https://res.cloudinary.com/demo/image/upload/v1/kosera/photo{}.jpg",
                id
            ),
            public_id: Some(format!("kosera/photo{}", id)),
            is_primary: false,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Clears the public id, as for photos registered by URL.
    pub fn external(mut self) -> Self {
        self.public_id = None;
        self
    }

    pub fn primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    pub async fn build(self) -> Result<entity::kos_photo::Model, DbErr> {
        entity::kos_photo::ActiveModel {
            kos_id: ActiveValue::Set(self.kos_id),
            url: ActiveValue::Set(self.url),
            public_id: ActiveValue::Set(self.public_id),
            is_primary: ActiveValue::Set(self.is_primary),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-primary photo for `kos_id`.
pub async fn create_photo(
    db: &DatabaseConnection,
    kos_id: i32,
) -> Result<entity::kos_photo::Model, DbErr> {
    KosPhotoFactory::new(db, kos_id).build().await
}
