//! Booking repository.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::{api::PageRequest, booking::BookingStatus},
    server::{
        data::kos::KosRepository,
        model::booking::{Booking, BookingDetails, BookingRenter, BookingScope, NewBooking},
    },
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending booking.
    pub async fn create(&self, booking: NewBooking) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(booking.user_id),
            kos_id: ActiveValue::Set(booking.kos_id),
            check_in_date: ActiveValue::Set(booking.check_in_date),
            check_out_date: ActiveValue::Set(booking.check_out_date),
            duration_months: ActiveValue::Set(booking.duration_months),
            total_price: ActiveValue::Set(booking.total_price),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            notes: ActiveValue::Set(booking.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Checks for bookings of `kos_id` in one of `statuses` overlapping
    /// `[check_in, check_out)`.
    ///
    /// An existing booking overlaps when it contains the new start, contains the new
    /// end, or lies entirely within the new range. Touching ranges (one ends the day
    /// the other starts) do not overlap.
    pub async fn has_overlap(
        &self,
        kos_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        statuses: &[BookingStatus],
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        use entity::booking::Column;

        let overlap = Condition::any()
            .add(
                Condition::all()
                    .add(Column::CheckInDate.lte(check_in))
                    .add(Column::CheckOutDate.gt(check_in)),
            )
            .add(
                Condition::all()
                    .add(Column::CheckInDate.lt(check_out))
                    .add(Column::CheckOutDate.gte(check_out)),
            )
            .add(
                Condition::all()
                    .add(Column::CheckInDate.gte(check_in))
                    .add(Column::CheckOutDate.lte(check_out)),
            );

        let mut query = entity::prelude::Booking::find()
            .filter(Column::KosId.eq(kos_id))
            .filter(Column::Status.is_in(statuses.iter().map(|s| s.as_str())))
            .filter(overlap);
        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update_status(&self, id: i32, status: BookingStatus) -> Result<Booking, DbErr> {
        let entity = entity::prelude::Booking::update(entity::booking::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    /// Completes every confirmed booking whose check-out date is before `today`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings completed
    pub async fn complete_elapsed(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Completed.as_str()),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .filter(entity::booking::Column::CheckOutDate.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets bookings visible in `scope`, newest first, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        scope: BookingScope,
        status: Option<BookingStatus>,
        page: PageRequest,
    ) -> Result<(Vec<Booking>, u64), DbErr> {
        let mut query = entity::prelude::Booking::find();

        match scope {
            BookingScope::All => {}
            BookingScope::Renter(user_id) => {
                query = query.filter(entity::booking::Column::UserId.eq(user_id));
            }
            BookingScope::Seller(seller_id) => {
                let kos_ids = KosRepository::new(self.db).ids_owned_by(seller_id).await?;
                query = query.filter(
                    Condition::any()
                        .add(entity::booking::Column::KosId.is_in(kos_ids))
                        .add(entity::booking::Column::UserId.eq(seller_id)),
                );
            }
        }
        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let bookings = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((bookings, total))
    }

    /// Attaches kos and renter data to bookings, preserving order.
    pub async fn into_details(&self, bookings: Vec<Booking>) -> Result<Vec<BookingDetails>, DbErr> {
        if bookings.is_empty() {
            return Ok(Vec::new());
        }

        let kos_ids: Vec<i32> = bookings.iter().map(|b| b.kos_id).collect();
        let renter_ids: Vec<i32> = bookings.iter().map(|b| b.user_id).collect();

        let kos = KosRepository::new(self.db).find_many(kos_ids).await?;
        let renters: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(renter_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        bookings
            .into_iter()
            .map(|booking| {
                let kos = kos.get(&booking.kos_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Kos {} for booking {} is missing",
                        booking.kos_id, booking.id
                    ))
                })?;
                let renter = renters.get(&booking.user_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Renter {} for booking {} is missing",
                        booking.user_id, booking.id
                    ))
                })?;

                Ok(BookingDetails {
                    kos_title: kos.title.clone(),
                    kos_city: kos.city.clone(),
                    kos_owner_id: kos.owner_id,
                    renter: BookingRenter {
                        id: renter.id,
                        name: renter.name.clone(),
                        contact: renter.contact.clone(),
                    },
                    booking,
                })
            })
            .collect()
    }

    /// Loads a booking with its kos and renter.
    pub async fn find_details(&self, id: i32) -> Result<Option<BookingDetails>, DbErr> {
        let Some(booking) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.into_details(vec![booking]).await?.pop())
    }

    /// Booking counts per stored status.
    pub async fn count_by_status(&self) -> Result<HashMap<BookingStatus, u64>, DbErr> {
        let mut counts = HashMap::new();
        for status in BookingStatus::ALL {
            let count = entity::prelude::Booking::find()
                .filter(entity::booking::Column::Status.eq(status.as_str()))
                .count(self.db)
                .await?;
            counts.insert(status, count);
        }

        Ok(counts)
    }
}
