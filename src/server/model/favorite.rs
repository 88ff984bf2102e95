//! Favorite domain models.

use chrono::{DateTime, Utc};

use crate::{model::favorite::FavoriteDto, server::model::kos::KosListing};

#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub kos_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kos_id: entity.kos_id,
            created_at: entity.created_at,
        }
    }
}

/// Favorite together with the listing it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteListing {
    pub favorite: Favorite,
    pub listing: KosListing,
}

impl FavoriteListing {
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.favorite.id,
            kos: self.listing.into_dto(),
            created_at: self.favorite.created_at,
        }
    }
}
