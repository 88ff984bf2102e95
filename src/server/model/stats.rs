//! Platform statistics for the admin dashboard.

use std::collections::HashMap;

use crate::model::{
    booking::BookingStatus,
    stats::{AdminStatsDto, BookingCountsDto, UserCountsDto},
    user::UserRole,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformStats {
    pub users_by_role: HashMap<UserRole, u64>,
    pub active_listings: u64,
    pub bookings_by_status: HashMap<BookingStatus, u64>,
    pub total_reviews: u64,
    pub total_favorites: u64,
}

impl PlatformStats {
    pub fn into_dto(self) -> AdminStatsDto {
        let user = |role| self.users_by_role.get(&role).copied().unwrap_or(0);
        let booking = |status| self.bookings_by_status.get(&status).copied().unwrap_or(0);

        AdminStatsDto {
            users: UserCountsDto {
                admin: user(UserRole::Admin),
                seller: user(UserRole::Seller),
                renter: user(UserRole::Renter),
                total: self.users_by_role.values().sum(),
            },
            active_listings: self.active_listings,
            bookings: BookingCountsDto {
                pending: booking(BookingStatus::Pending),
                confirmed: booking(BookingStatus::Confirmed),
                cancelled: booking(BookingStatus::Cancelled),
                completed: booking(BookingStatus::Completed),
                total: self.bookings_by_status.values().sum(),
            },
            total_reviews: self.total_reviews,
            total_favorites: self.total_favorites,
        }
    }
}
