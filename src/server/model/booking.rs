//! Booking domain models, parameters and the status state machine.
//!
//! Status changes are decided by [`check_transition`], a pure function of who is
//! acting and the from/to statuses. Services resolve the actor with
//! [`BookingActor::resolve`] before calling it.

use chrono::{DateTime, Months, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::model::{
    booking::{BookingDto, BookingRenterDto, BookingStatus, CreateBookingDto},
    user::UserRole,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub kos_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub duration_months: i32,
    pub total_price: i64,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Err(DbErr::Custom)` - Stored status is not a known booking status
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, DbErr> {
        let status = BookingStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown status '{}' stored for booking {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            kos_id: entity.kos_id,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            duration_months: entity.duration_months,
            total_price: entity.total_price,
            status,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRenter {
    pub id: i32,
    pub name: String,
    pub contact: Option<String>,
}

/// Booking joined with the kos and renter data needed for display and access checks.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub kos_title: String,
    pub kos_city: String,
    pub kos_owner_id: i32,
    pub renter: BookingRenter,
}

impl BookingDetails {
    pub fn into_dto(self) -> BookingDto {
        let booking = self.booking;

        BookingDto {
            id: booking.id,
            kos_id: booking.kos_id,
            kos_title: self.kos_title,
            kos_city: self.kos_city,
            renter: BookingRenterDto {
                id: self.renter.id,
                name: self.renter.name,
                contact: self.renter.contact,
            },
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            duration_months: booking.duration_months,
            total_price: booking.total_price,
            status: booking.status,
            notes: booking.notes,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Parameters for creating a booking, as received from the renter.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub user_id: i32,
    pub kos_id: i32,
    pub check_in_date: NaiveDate,
    pub duration_months: u32,
    pub notes: Option<String>,
}

impl CreateBookingParam {
    pub fn from_dto(user_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            user_id,
            kos_id: dto.kos_id,
            check_in_date: dto.check_in_date,
            duration_months: dto.duration_months,
            notes: dto
                .notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
        }
    }
}

/// Fully priced booking ready for insertion.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i32,
    pub kos_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub duration_months: i32,
    pub total_price: i64,
    pub notes: Option<String>,
}

/// Which bookings a caller may list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    All,
    /// Bookings on kos owned by this seller, plus the ones the seller placed.
    Seller(i32),
    /// Bookings placed by this renter.
    Renter(i32),
}

impl BookingScope {
    pub fn for_user(user_id: i32, role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::All,
            UserRole::Seller => Self::Seller(user_id),
            UserRole::Renter => Self::Renter(user_id),
        }
    }
}

/// Check-out date `months` calendar months after `check_in`.
///
/// Month ends clamp: Jan 31 + 1 month is Feb 28 (or 29).
pub fn check_out_date(check_in: NaiveDate, months: u32) -> Option<NaiveDate> {
    check_in.checked_add_months(Months::new(months))
}

/// Monthly price times duration, `None` on overflow.
pub fn total_price(monthly_price: i64, months: u32) -> Option<i64> {
    monthly_price.checked_mul(i64::from(months))
}

/// How the caller relates to a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingActor {
    Admin,
    /// Owner of the booked kos.
    Seller,
    /// The renter who placed the booking.
    Renter,
}

impl BookingActor {
    /// Resolves the caller's relationship to a booking, `None` when unrelated.
    ///
    /// Admin takes precedence, then kos ownership, then authorship of the booking.
    pub fn resolve(
        user_id: i32,
        role: UserRole,
        renter_id: i32,
        kos_owner_id: i32,
    ) -> Option<Self> {
        if role == UserRole::Admin {
            Some(Self::Admin)
        } else if user_id == kos_owner_id {
            Some(Self::Seller)
        } else if user_id == renter_id {
            Some(Self::Renter)
        } else {
            None
        }
    }
}

/// Returns whether `actor` may move a booking from `from` to `to`.
///
/// Listed transitions: pending→confirmed, pending→cancelled, confirmed→cancelled,
/// confirmed→completed. Admins may take any of them, sellers all but completing,
/// renters may only cancel a pending booking. Terminal statuses never change and a
/// transition to the current status is rejected.
pub fn check_transition(actor: BookingActor, from: BookingStatus, to: BookingStatus) -> bool {
    use BookingStatus::*;

    if from.is_terminal() {
        return false;
    }

    let listed = matches!(
        (from, to),
        (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled) | (Confirmed, Completed)
    );
    if !listed {
        return false;
    }

    match actor {
        BookingActor::Admin => true,
        BookingActor::Seller => to != Completed,
        BookingActor::Renter => from == Pending && to == Cancelled,
    }
}
