use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PhotoDto {
    pub id: i32,
    pub kos_id: i32,
    pub url: String,
    /// 400x300 CDN rendition; equals `url` for externally hosted photos.
    pub thumbnail_url: String,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AddPhotoUrlDto {
    #[validate(url(message = "Must be a valid URL"), length(max = 2000))]
    pub url: String,
    #[serde(default)]
    pub is_primary: bool,
}
