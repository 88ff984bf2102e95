//! Kos photo domain model.

use chrono::{DateTime, Utc};

use crate::{model::photo::PhotoDto, server::integration::cdn};

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub kos_id: i32,
    pub url: String,
    /// CDN asset id; `None` for photos attached by external URL.
    pub public_id: Option<String>,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    pub fn from_entity(entity: entity::kos_photo::Model) -> Self {
        Self {
            id: entity.id,
            kos_id: entity.kos_id,
            url: entity.url,
            public_id: entity.public_id,
            is_primary: entity.is_primary,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PhotoDto {
        let thumbnail_url = cdn::thumbnail_url(&self.url, self.public_id.as_deref());

        PhotoDto {
            id: self.id,
            kos_id: self.kos_id,
            url: self.url,
            thumbnail_url,
            is_primary: self.is_primary,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a photo row after upload or URL attach.
#[derive(Debug, Clone)]
pub struct CreatePhotoParam {
    pub kos_id: i32,
    pub url: String,
    pub public_id: Option<String>,
    pub is_primary: bool,
}
