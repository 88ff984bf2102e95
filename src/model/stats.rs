use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserCountsDto {
    pub admin: u64,
    pub seller: u64,
    pub renter: u64,
    pub total: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BookingCountsDto {
    pub pending: u64,
    pub confirmed: u64,
    pub cancelled: u64,
    pub completed: u64,
    pub total: u64,
}

/// Platform-wide counters for the admin dashboard. Soft-deleted users and
/// listings are excluded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminStatsDto {
    pub users: UserCountsDto,
    pub active_listings: u64,
    pub bookings: BookingCountsDto,
    pub total_reviews: u64,
    pub total_favorites: u64,
}
