use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

/// Earliest and latest booking lengths in months.
pub const MIN_DURATION_MONTHS: u32 = 1;
pub const MAX_DURATION_MONTHS: u32 = 24;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BookingRenterDto {
    pub id: i32,
    pub name: String,
    pub contact: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BookingDto {
    pub id: i32,
    pub kos_id: i32,
    pub kos_title: String,
    pub kos_city: String,
    pub renter: BookingRenterDto,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub duration_months: i32,
    pub total_price: i64,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateBookingDto {
    pub kos_id: i32,
    /// `YYYY-MM-DD`, today or later.
    pub check_in_date: NaiveDate,
    #[validate(range(min = 1, max = 24, message = "Duration must be between 1 and 24 months"))]
    pub duration_months: u32,
    #[validate(length(max = 500, message = "Notes must be at most 500 chars"))]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, Validate)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct BookingListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub status: Option<BookingStatus>,
}
