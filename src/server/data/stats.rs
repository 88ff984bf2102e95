//! Aggregate counts for the admin dashboard.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    model::user::UserRole,
    server::{
        data::{booking::BookingRepository, kos::KosRepository, review::ReviewRepository},
        model::stats::PlatformStats,
    },
};

pub struct StatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Active users per role. Soft-deleted users are not counted.
    pub async fn users_by_role(&self) -> Result<HashMap<UserRole, u64>, DbErr> {
        let mut counts = HashMap::new();
        for role in [UserRole::Admin, UserRole::Seller, UserRole::Renter] {
            let count = entity::prelude::User::find()
                .filter(entity::user::Column::Role.eq(role.as_str()))
                .filter(entity::user::Column::DeletedAt.is_null())
                .count(self.db)
                .await?;
            counts.insert(role, count);
        }

        Ok(counts)
    }

    pub async fn platform(&self) -> Result<PlatformStats, DbErr> {
        Ok(PlatformStats {
            users_by_role: self.users_by_role().await?,
            active_listings: KosRepository::new(self.db).count_active().await?,
            bookings_by_status: BookingRepository::new(self.db).count_by_status().await?,
            total_reviews: ReviewRepository::new(self.db).count().await?,
            total_favorites: entity::prelude::Favorite::find().count(self.db).await?,
        })
    }
}
