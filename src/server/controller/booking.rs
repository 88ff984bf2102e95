use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageRequest, PaginatedDto},
        booking::{BookingDto, BookingListQuery, CreateBookingDto, UpdateBookingStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{BookingDetails, CreateBookingParam},
        service::booking::BookingService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List bookings visible to the caller.
///
/// Admins see every booking, sellers the bookings on their listings, renters their
/// own. Confirmed bookings whose check-out date has passed are completed first.
///
/// # Access Control
/// - Authenticated, scoped by role
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(BookingListQuery),
    responses(
        (status = 200, description = "Paginated bookings", body = ApiResponse<PaginatedDto<BookingDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let page = PageRequest::new(query.page, query.per_page);
    let (bookings, total) = BookingService::new(&state.db)
        .get_paginated(&user, query.status, page, Utc::now().date_naive())
        .await?;
    let items = bookings.into_iter().map(BookingDetails::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(PaginatedDto::new(items, total, page))),
    ))
}

/// Book a room.
///
/// Prices the stay at the listing's monthly price times the duration and checks
/// the dates against pending and confirmed bookings of the same listing.
///
/// # Access Control
/// - Authenticated, not the owner of the listing
///
/// # Returns
/// - `201 Created` - Pending booking
/// - `400 Bad Request` - Invalid dates or duration
/// - `403 Forbidden` - Caller owns the listing
/// - `404 Not Found` - No such listing
/// - `409 Conflict` - No free rooms or overlapping dates
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingDto>),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot book own kos", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 409, description = "Kos unavailable for these dates", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .create(
            CreateBookingParam::from_dto(user.id, payload),
            Utc::now().date_naive(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(booking.into_dto()))))
}

/// Get a booking.
///
/// # Access Control
/// - The renter, the owner of the listing, or `Admin`
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "The booking", body = ApiResponse<BookingDto>),
        (status = 403, description = "No access to this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db).get(&user, id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(booking.into_dto()))))
}

/// Change the status of a booking.
///
/// Allowed transitions are pending→confirmed, pending→cancelled,
/// confirmed→cancelled and confirmed→completed.
///
/// # Access Control
/// - `Admin` - Any allowed transition
/// - Owner of the listing - Any allowed transition except completing
/// - Renter - Cancel a pending booking
///
/// # Returns
/// - `200 OK` - Booking with its new status
/// - `400 Bad Request` - Transition not allowed for the caller (`invalid_transition`)
/// - `403 Forbidden` - Caller unrelated to the booking
/// - `409 Conflict` - Confirming would overlap another confirmed booking
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<BookingDto>),
        (status = 400, description = "Invalid transition", body = ErrorDto),
        (status = 403, description = "No access to this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Overlaps a confirmed booking", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .update_status(&user, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(booking.into_dto()))))
}
