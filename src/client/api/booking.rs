use crate::{
    client::{
        api::helper::{get, parse_response, patch, post, send_request, serialize_json, with_query},
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        booking::{BookingDto, BookingStatus, CreateBookingDto, UpdateBookingStatusDto},
    },
};

pub async fn get_bookings(
    page: u64,
    per_page: u64,
    status: Option<BookingStatus>,
) -> Result<PaginatedDto<BookingDto>, ApiError> {
    let url = with_query(
        "/api/bookings",
        &[
            ("page", Some(page.to_string())),
            ("per_page", Some(per_page.to_string())),
            ("status", status.map(|s| s.as_str().to_string())),
        ],
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_booking(payload: CreateBookingDto) -> Result<BookingDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/bookings").body(body)).await?;
    parse_response(response).await
}

pub async fn update_booking_status(id: i32, status: BookingStatus) -> Result<BookingDto, ApiError> {
    let url = format!("/api/bookings/{}/status", id);
    let body = serialize_json(&UpdateBookingStatusDto { status })?;
    let response = send_request(patch(&url).body(body)).await?;
    parse_response(response).await
}
