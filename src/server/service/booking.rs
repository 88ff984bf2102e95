//! Booking creation, listing and the status lifecycle.

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{api::PageRequest, booking::BookingStatus},
    server::{
        data::{booking::BookingRepository, kos::KosRepository},
        error::AppError,
        model::{
            booking::{
                self, check_transition, BookingActor, BookingDetails, BookingScope,
                CreateBookingParam, NewBooking,
            },
            user::User,
        },
    },
};

/// Statuses that hold a room for their date range.
const ACTIVE_STATUSES: [BookingStatus; 2] = [BookingStatus::Pending, BookingStatus::Confirmed];

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a kos for `param.duration_months` months from `param.check_in_date`.
    ///
    /// The overlap check and the insert share one transaction. SQLite admits one
    /// writer at a time, so a concurrent create for the same kos fails on the
    /// write lock and is reported as a conflict.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The new pending booking
    /// - `Err(AppError::BadRequest)` - Check-in is before `today`
    /// - `Err(AppError::NotFound)` - Kos missing or deleted
    /// - `Err(AppError::Forbidden)` - Caller owns the kos
    /// - `Err(AppError::Conflict)` - No free rooms, or the dates overlap an active booking
    pub async fn create(
        &self,
        param: CreateBookingParam,
        today: NaiveDate,
    ) -> Result<BookingDetails, AppError> {
        if param.check_in_date < today {
            return Err(AppError::BadRequest(
                "check_in_date cannot be in the past".to_string(),
            ));
        }

        let check_out_date = booking::check_out_date(param.check_in_date, param.duration_months)
            .ok_or_else(|| AppError::BadRequest("check_out_date is out of range".to_string()))?;
        let duration_months = i32::try_from(param.duration_months)
            .map_err(|_| AppError::BadRequest("duration_months is out of range".to_string()))?;

        let txn = self.db.begin().await?;

        let kos = KosRepository::new(&txn)
            .find_active_by_id(param.kos_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Kos {} not found", param.kos_id)))?;
        if kos.owner_id == param.user_id {
            return Err(AppError::Forbidden(
                "You cannot book your own kos".to_string(),
            ));
        }
        if kos.available_rooms() == 0 {
            return Err(AppError::Conflict(
                "This kos has no available rooms".to_string(),
            ));
        }

        let total_price = booking::total_price(kos.price, param.duration_months)
            .ok_or_else(|| AppError::BadRequest("total_price is out of range".to_string()))?;

        let repo = BookingRepository::new(&txn);
        if repo
            .has_overlap(
                kos.id,
                param.check_in_date,
                check_out_date,
                &ACTIVE_STATUSES,
                None,
            )
            .await?
        {
            return Err(AppError::Conflict(
                "The kos is already booked for the selected dates".to_string(),
            ));
        }

        let created = repo
            .create(NewBooking {
                user_id: param.user_id,
                kos_id: kos.id,
                check_in_date: param.check_in_date,
                check_out_date,
                duration_months,
                total_price,
                notes: param.notes,
            })
            .await
            .map_err(write_contention)?;
        txn.commit().await.map_err(write_contention)?;

        tracing::info!(
            "Booking {} created for kos {} by user {} ({} to {})",
            created.id,
            created.kos_id,
            created.user_id,
            created.check_in_date,
            created.check_out_date
        );

        self.details(created.id).await
    }

    /// Lists bookings visible to `actor`.
    ///
    /// Completes elapsed confirmed bookings first so the list reflects `today`.
    pub async fn get_paginated(
        &self,
        actor: &User,
        status: Option<BookingStatus>,
        page: PageRequest,
        today: NaiveDate,
    ) -> Result<(Vec<BookingDetails>, u64), AppError> {
        let repo = BookingRepository::new(self.db);

        let completed = repo.complete_elapsed(today).await?;
        if completed > 0 {
            tracing::info!("Auto-completed {} elapsed bookings", completed);
        }

        let scope = BookingScope::for_user(actor.id, actor.role);
        let (bookings, total) = repo.get_paginated(scope, status, page).await?;
        let details = repo.into_details(bookings).await?;

        Ok((details, total))
    }

    /// Gets a booking for its renter, the kos owner or an admin.
    pub async fn get(&self, actor: &User, id: i32) -> Result<BookingDetails, AppError> {
        let details = self.details(id).await?;
        resolve_actor(actor, &details)?;

        Ok(details)
    }

    /// Moves a booking to `to` if the caller's role allows it.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - Booking with its new status
    /// - `Err(AppError::Forbidden)` - Caller is unrelated to the booking
    /// - `Err(AppError::InvalidTransition)` - Transition not allowed for this caller
    /// - `Err(AppError::Conflict)` - Confirming would overlap another confirmed booking
    pub async fn update_status(
        &self,
        actor: &User,
        id: i32,
        to: BookingStatus,
    ) -> Result<BookingDetails, AppError> {
        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        let mut details = repo.find_details(id).await?.ok_or_else(|| not_found(id))?;
        let booking_actor = resolve_actor(actor, &details)?;

        let from = details.booking.status;
        if !check_transition(booking_actor, from, to) {
            return Err(AppError::InvalidTransition(format!(
                "Cannot change booking status from {} to {}",
                from, to
            )));
        }

        if to == BookingStatus::Confirmed
            && repo
                .has_overlap(
                    details.booking.kos_id,
                    details.booking.check_in_date,
                    details.booking.check_out_date,
                    &[BookingStatus::Confirmed],
                    Some(id),
                )
                .await?
        {
            return Err(AppError::Conflict(
                "Another confirmed booking overlaps these dates".to_string(),
            ));
        }

        details.booking = repo.update_status(id, to).await?;
        txn.commit().await?;

        tracing::info!(
            "Booking {} changed from {} to {} by user {}",
            id,
            from,
            to,
            actor.id
        );

        Ok(details)
    }

    async fn details(&self, id: i32) -> Result<BookingDetails, AppError> {
        BookingRepository::new(self.db)
            .find_details(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn resolve_actor(actor: &User, details: &BookingDetails) -> Result<BookingActor, AppError> {
    BookingActor::resolve(
        actor.id,
        actor.role,
        details.booking.user_id,
        details.kos_owner_id,
    )
    .ok_or_else(|| AppError::Forbidden("You do not have access to this booking".to_string()))
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Booking {} not found", id))
}

/// Maps a lost race for SQLite's write lock to a conflict.
fn write_contention(err: DbErr) -> AppError {
    let message = err.to_string();
    if message.contains("database is locked") || message.contains("SQLITE_BUSY") {
        tracing::warn!("Booking insert lost the write lock: {}", message);
        return AppError::Conflict(
            "Another booking for this kos is being processed, please try again".to_string(),
        );
    }

    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_database_is_a_conflict() {
        let err = write_contention(DbErr::Custom("database is locked".to_string()));
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn other_database_errors_stay_internal() {
        let err = write_contention(DbErr::Custom("disk I/O error".to_string()));
        assert!(matches!(err, AppError::DbErr(_)));
    }
}
