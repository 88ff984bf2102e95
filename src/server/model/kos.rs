//! Kos listing domain models and parameters.
//!
//! A listing spans two tables: `posts` (title, price, counters, soft delete) and
//! `kos` (building details). `Kos` merges both rows; `KosListing` adds the owner,
//! average rating and primary photo needed to render a card.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::kos::{
        CreateKosDto, KosDetailDto, KosDto, KosListQuery, KosOwnerDto, KosSort, KosType,
        UpdateKosDto,
    },
    server::model::{photo::Photo, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Kos {
    pub id: i32,
    pub post_id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub address: String,
    pub city: String,
    pub total_rooms: i32,
    pub occupied_rooms: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub facilities: Option<String>,
    pub kos_type: KosType,
    pub view_count: i32,
    pub favorite_count: i32,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Kos {
    /// Merges a post row and its kos row.
    ///
    /// # Returns
    /// - `Ok(Kos)` - Combined domain model
    /// - `Err(DbErr::Custom)` - Stored kos type is unknown
    pub fn from_entities(post: entity::post::Model, kos: entity::kos::Model) -> Result<Self, DbErr> {
        let kos_type = KosType::parse(&kos.kos_type).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown kos type '{}' stored for kos {}",
                kos.kos_type, kos.id
            ))
        })?;

        Ok(Self {
            id: kos.id,
            post_id: post.id,
            owner_id: post.user_id,
            title: post.title,
            description: post.description,
            price: post.price,
            address: kos.address,
            city: kos.city,
            total_rooms: kos.total_rooms,
            occupied_rooms: kos.occupied_rooms,
            latitude: kos.latitude,
            longitude: kos.longitude,
            facilities: kos.facilities,
            kos_type,
            view_count: post.view_count,
            favorite_count: post.favorite_count,
            review_count: post.review_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
            deleted_at: post.deleted_at,
        })
    }

    pub fn available_rooms(&self) -> i32 {
        (self.total_rooms - self.occupied_rooms).max(0)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Owners and admins may edit the listing and its photos.
    pub fn can_manage(&self, user: &User) -> bool {
        user.is_admin() || user.id == self.owner_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KosOwner {
    pub id: i32,
    pub name: String,
    pub contact: Option<String>,
}

impl KosOwner {
    pub fn from_entity(entity: &entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            contact: entity.contact.clone(),
        }
    }
}

/// Kos enriched with everything a listing card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct KosListing {
    pub kos: Kos,
    pub owner: KosOwner,
    pub average_rating: f64,
    pub primary_photo: Option<Photo>,
}

impl KosListing {
    pub fn into_dto(self) -> KosDto {
        let available_rooms = self.kos.available_rooms();
        let kos = self.kos;

        KosDto {
            id: kos.id,
            post_id: kos.post_id,
            owner: KosOwnerDto {
                id: self.owner.id,
                name: self.owner.name,
                contact: self.owner.contact,
            },
            title: kos.title,
            description: kos.description,
            price: kos.price,
            address: kos.address,
            city: kos.city,
            total_rooms: kos.total_rooms,
            occupied_rooms: kos.occupied_rooms,
            available_rooms,
            latitude: kos.latitude,
            longitude: kos.longitude,
            facilities: kos.facilities,
            kos_type: kos.kos_type,
            view_count: kos.view_count,
            favorite_count: kos.favorite_count,
            review_count: kos.review_count,
            average_rating: round_rating(self.average_rating),
            primary_photo: self.primary_photo.map(Photo::into_dto),
            created_at: kos.created_at,
            updated_at: kos.updated_at,
        }
    }
}

/// Listing page: the card data plus every photo and the caller's favorite flag.
#[derive(Debug, Clone, PartialEq)]
pub struct KosDetail {
    pub listing: KosListing,
    pub photos: Vec<Photo>,
    pub is_favorited: bool,
}

impl KosDetail {
    pub fn into_dto(self) -> KosDetailDto {
        KosDetailDto {
            kos: self.listing.into_dto(),
            photos: self.photos.into_iter().map(Photo::into_dto).collect(),
            is_favorited: self.is_favorited,
        }
    }
}

/// Rounds to one decimal place for display.
fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}

/// Parameters for creating a post and its kos row.
#[derive(Debug, Clone)]
pub struct CreateKosParam {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub address: String,
    pub city: String,
    pub total_rooms: i32,
    pub occupied_rooms: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub facilities: Option<String>,
    pub kos_type: KosType,
}

impl CreateKosParam {
    pub fn from_dto(owner_id: i32, dto: CreateKosDto) -> Self {
        Self {
            owner_id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            price: dto.price,
            address: dto.address.trim().to_string(),
            city: dto.city.trim().to_string(),
            total_rooms: dto.total_rooms,
            occupied_rooms: dto.occupied_rooms.unwrap_or(0),
            latitude: dto.latitude,
            longitude: dto.longitude,
            facilities: dto.facilities,
            kos_type: dto.kos_type,
        }
    }
}

/// Partial update of a listing. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateKosParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub total_rooms: Option<i32>,
    pub occupied_rooms: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub facilities: Option<String>,
    pub kos_type: Option<KosType>,
}

impl From<UpdateKosDto> for UpdateKosParam {
    fn from(dto: UpdateKosDto) -> Self {
        Self {
            title: dto.title.map(|title| title.trim().to_string()),
            description: dto.description,
            price: dto.price,
            address: dto.address.map(|address| address.trim().to_string()),
            city: dto.city.map(|city| city.trim().to_string()),
            total_rooms: dto.total_rooms,
            occupied_rooms: dto.occupied_rooms,
            latitude: dto.latitude,
            longitude: dto.longitude,
            facilities: dto.facilities,
            kos_type: dto.kos_type,
        }
    }
}

/// Search filters for the public listing and the owner's own listings.
#[derive(Debug, Clone, Default)]
pub struct KosFilter {
    pub q: Option<String>,
    pub city: Option<String>,
    pub kos_type: Option<KosType>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub available_only: bool,
    pub owner_id: Option<i32>,
    pub sort: KosSort,
}

impl From<KosListQuery> for KosFilter {
    fn from(query: KosListQuery) -> Self {
        Self {
            q: non_blank(query.q),
            city: non_blank(query.city),
            kos_type: query.kos_type,
            min_price: query.min_price,
            max_price: query.max_price,
            available_only: query.available_only.unwrap_or(false),
            owner_id: None,
            sort: query.sort.unwrap_or_default(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
