//! Booking fixtures for creating in-memory test data.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::booking;

/// Creates a pending three-month booking for user `1` on kos `1`.
///
/// # Default Values
/// - check_in_date: 2026-02-01
/// - check_out_date: 2026-05-01
/// - total_price: `3_600_000`
/// - status: `"pending"`
pub fn entity() -> booking::Model {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    booking::Model {
        id: 1,
        user_id: 1,
        kos_id: 1,
        check_in_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        check_out_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        duration_months: 3,
        total_price: 3_600_000,
        status: "pending".to_string(),
        notes: None,
        created_at: at,
        updated_at: at,
    }
}

/// Creates a booking entity model with the given stored status string.
pub fn entity_with_status(status: &str) -> booking::Model {
    booking::Model {
        status: status.to_string(),
        ..entity()
    }
}
