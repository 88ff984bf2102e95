use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

use crate::model::photo::PhotoDto;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum KosType {
    Putra,
    Putri,
    Campur,
}

impl KosType {
    pub const ALL: [KosType; 3] = [Self::Putra, Self::Putri, Self::Campur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Putra => "putra",
            Self::Putri => "putri",
            Self::Campur => "campur",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "putra" => Some(Self::Putra),
            "putri" => Some(Self::Putri),
            "campur" => Some(Self::Campur),
            _ => None,
        }
    }

    /// Indonesian label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Putra => "Putra",
            Self::Putri => "Putri",
            Self::Campur => "Campur",
        }
    }
}

/// Listing order for `GET /api/kos`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum KosSort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Popular,
    Rating,
    Quality,
}

impl KosSort {
    pub const ALL: [KosSort; 6] = [
        Self::Newest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::Popular,
        Self::Rating,
        Self::Quality,
    ];

    /// Query-string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::Quality => "quality",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceAsc => "Lowest price",
            Self::PriceDesc => "Highest price",
            Self::Popular => "Most viewed",
            Self::Rating => "Top rated",
            Self::Quality => "Recommended",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct KosOwnerDto {
    pub id: i32,
    pub name: String,
    pub contact: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct KosDto {
    /// Kos id. Bookings, reviews, favorites and photos reference this id.
    pub id: i32,
    pub post_id: i32,
    pub owner: KosOwnerDto,
    pub title: String,
    pub description: Option<String>,
    /// Monthly price in rupiah.
    pub price: i64,
    pub address: String,
    pub city: String,
    pub total_rooms: i32,
    pub occupied_rooms: i32,
    pub available_rooms: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub facilities: Option<String>,
    pub kos_type: KosType,
    pub view_count: i32,
    pub favorite_count: i32,
    pub review_count: i32,
    /// Average review rating, `0.0` when unreviewed.
    pub average_rating: f64,
    pub primary_photo: Option<PhotoDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct KosDetailDto {
    #[serde(flatten)]
    pub kos: KosDto,
    pub photos: Vec<PhotoDto>,
    /// Whether the caller has favorited this kos; `false` for anonymous callers.
    pub is_favorited: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateKosDto {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 chars"))]
    pub title: String,
    #[validate(length(max = 5000, message = "Description must be at most 5000 chars"))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: i64,
    #[validate(length(min = 1, max = 500, message = "Address must be between 1 and 500 chars"))]
    pub address: String,
    #[validate(length(min = 1, max = 100, message = "City must be between 1 and 100 chars"))]
    pub city: String,
    #[validate(range(min = 1, max = 1000, message = "Total rooms must be between 1 and 1000"))]
    pub total_rooms: i32,
    #[validate(range(min = 0, max = 1000, message = "Occupied rooms must be between 0 and 1000"))]
    pub occupied_rooms: Option<i32>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    #[validate(length(max = 2000, message = "Facilities must be at most 2000 chars"))]
    pub facilities: Option<String>,
    pub kos_type: KosType,
}

/// Partial update; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateKosDto {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 chars"))]
    pub title: Option<String>,
    #[validate(length(max = 5000, message = "Description must be at most 5000 chars"))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: Option<i64>,
    #[validate(length(min = 1, max = 500, message = "Address must be between 1 and 500 chars"))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100, message = "City must be between 1 and 100 chars"))]
    pub city: Option<String>,
    #[validate(range(min = 1, max = 1000, message = "Total rooms must be between 1 and 1000"))]
    pub total_rooms: Option<i32>,
    #[validate(range(min = 0, max = 1000, message = "Occupied rooms must be between 0 and 1000"))]
    pub occupied_rooms: Option<i32>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    #[validate(length(max = 2000, message = "Facilities must be at most 2000 chars"))]
    pub facilities: Option<String>,
    pub kos_type: Option<KosType>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, Validate)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct KosListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Free text matched against title, address and city.
    #[validate(length(max = 100))]
    pub q: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    pub kos_type: Option<KosType>,
    #[validate(range(min = 0, message = "Price filters must not be negative"))]
    pub min_price: Option<i64>,
    #[validate(range(min = 0, message = "Price filters must not be negative"))]
    pub max_price: Option<i64>,
    /// Only listings with at least one free room.
    pub available_only: Option<bool>,
    pub sort: Option<KosSort>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_query_form_matches_serde() {
        for sort in KosSort::ALL {
            let json = serde_json::to_value(sort).unwrap();
            assert_eq!(json.as_str(), Some(sort.as_str()));
        }
    }

    #[test]
    fn kos_type_round_trips_through_parse() {
        for kos_type in KosType::ALL {
            assert_eq!(KosType::parse(kos_type.as_str()), Some(kos_type));
        }
        assert_eq!(KosType::parse("mixed"), None);
    }
}
