//! Booking factory for creating test booking entities.

use chrono::{Months, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// The check-out date is derived from the check-in date and duration so the
/// row always satisfies the booking date invariant.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, renter.id, kos.id)
///     .check_in(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
///     .months(3)
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kos_id: i32,
    check_in: NaiveDate,
    months: u32,
    monthly_price: i64,
    status: String,
    notes: Option<String>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - check_in: thirty days from today
    /// - months: `1`
    /// - monthly_price: `1_000_000`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, kos_id: i32) -> Self {
        let check_in = Utc::now().date_naive() + chrono::Duration::days(30);
        Self {
            db,
            user_id,
            kos_id,
            check_in,
            months: 1,
            monthly_price: 1_000_000,
            status: "pending".to_string(),
            notes: None,
        }
    }

    pub fn check_in(mut self, check_in: NaiveDate) -> Self {
        self.check_in = check_in;
        self
    }

    pub fn months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    pub fn monthly_price(mut self, monthly_price: i64) -> Self {
        self.monthly_price = monthly_price;
        self
    }

    /// Sets the stored status string (`pending`, `confirmed`, `cancelled`, `completed`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert or a check-in date too late to extend
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        let check_out = self
            .check_in
            .checked_add_months(Months::new(self.months))
            .ok_or_else(|| DbErr::Custom("check-out date out of range".to_string()))?;

        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            kos_id: ActiveValue::Set(self.kos_id),
            check_in_date: ActiveValue::Set(self.check_in),
            check_out_date: ActiveValue::Set(check_out),
            duration_months: ActiveValue::Set(self.months as i32),
            total_price: ActiveValue::Set(self.monthly_price * self.months as i64),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending one-month booking starting thirty days from today.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    kos_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, kos_id).build().await
}
