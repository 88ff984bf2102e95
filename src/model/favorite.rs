use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::kos::KosDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FavoriteDto {
    pub id: i32,
    pub kos: KosDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AddFavoriteDto {
    pub kos_id: i32,
}
