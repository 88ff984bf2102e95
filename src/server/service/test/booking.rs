use super::*;
use crate::{
    model::{
        api::PageRequest,
        booking::{BookingStatus, CreateBookingDto},
    },
    server::{model::booking::CreateBookingParam, service::booking::BookingService},
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, kos::KosFactory},
};

const TODAY: (i32, u32, u32) = (2026, 1, 10);

fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

fn request(user_id: i32, kos_id: i32, check_in: NaiveDate, months: u32) -> CreateBookingParam {
    CreateBookingParam::from_dto(
        user_id,
        CreateBookingDto {
            kos_id,
            check_in_date: check_in,
            duration_months: months,
            notes: Some("  ".to_string()),
        },
    )
}

/// Tests pricing and dates of a new booking.
///
/// Expected: pending, check-out three calendar months later, price times months
#[tokio::test]
async fn creates_priced_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let (_, kos) = KosFactory::new(db, seller.id).price(1_250_000).build().await?;
    let renter = factory::create_renter(db).await?;

    let booking = BookingService::new(db)
        .create(request(renter.id, kos.id, date(2026, 1, 31), 3), today())
        .await?;

    assert_eq!(booking.booking.status, BookingStatus::Pending);
    assert_eq!(booking.booking.check_out_date, date(2026, 4, 30));
    assert_eq!(booking.booking.total_price, 3_750_000);
    assert_eq!(booking.booking.notes, None);
    assert_eq!(booking.kos_owner_id, seller.id);

    Ok(())
}

/// Tests that a check-in before today is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_past_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;

    let result = BookingService::new(db)
        .create(request(renter.id, kos.id, date(2026, 1, 9), 1), today())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that owners cannot book their own kos.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn rejects_self_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;

    let result = BookingService::new(db)
        .create(request(seller.id, kos.id, date(2026, 2, 1), 1), today())
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests booking a kos with every room occupied.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_full_kos() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let (_, kos) = KosFactory::new(db, seller.id)
        .total_rooms(4)
        .occupied_rooms(4)
        .build()
        .await?;
    let renter = factory::create_renter(db).await?;

    let result = BookingService::new(db)
        .create(request(renter.id, kos.id, date(2026, 2, 1), 1), today())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests booking a deleted listing.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_deleted_kos() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let (_, kos) = KosFactory::new(db, seller.id).deleted(true).build().await?;
    let renter = factory::create_renter(db).await?;

    let result = BookingService::new(db)
        .create(request(renter.id, kos.id, date(2026, 2, 1), 1), today())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the availability check against an existing pending booking.
///
/// Expected: overlapping request conflicts, adjacent request succeeds
#[tokio::test]
async fn rejects_overlapping_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let first = factory::create_renter(db).await?;
    let second = factory::create_renter(db).await?;
    let service = BookingService::new(db);

    service
        .create(request(first.id, kos.id, date(2026, 2, 1), 2), today())
        .await?;

    let overlapping = service
        .create(request(second.id, kos.id, date(2026, 3, 1), 1), today())
        .await;
    assert!(matches!(overlapping, Err(AppError::Conflict(_))));

    let adjacent = service
        .create(request(second.id, kos.id, date(2026, 4, 1), 1), today())
        .await;
    assert!(adjacent.is_ok());

    Ok(())
}

/// Tests the role rules of the status lifecycle.
///
/// Renters cannot confirm, strangers get no access, sellers confirm, sellers
/// cannot complete, admins complete.
///
/// Expected: InvalidTransition, Forbidden, Ok, InvalidTransition, Ok
#[tokio::test]
async fn enforces_lifecycle_per_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let stranger = factory::create_renter(db).await?;
    let admin = factory::create_admin(db).await?;
    let booking = factory::create_booking(db, renter.id, kos.id).await?;

    let service = BookingService::new(db);
    let (seller, renter, stranger, admin) =
        (domain(seller), domain(renter), domain(stranger), domain(admin));

    let result = service
        .update_status(&renter, booking.id, BookingStatus::Confirmed)
        .await;
    assert!(matches!(result, Err(AppError::InvalidTransition(_))));

    let result = service
        .update_status(&stranger, booking.id, BookingStatus::Cancelled)
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let confirmed = service
        .update_status(&seller, booking.id, BookingStatus::Confirmed)
        .await?;
    assert_eq!(confirmed.booking.status, BookingStatus::Confirmed);

    let result = service
        .update_status(&seller, booking.id, BookingStatus::Completed)
        .await;
    assert!(matches!(result, Err(AppError::InvalidTransition(_))));

    let completed = service
        .update_status(&admin, booking.id, BookingStatus::Completed)
        .await?;
    assert_eq!(completed.booking.status, BookingStatus::Completed);

    let result = service
        .update_status(&admin, booking.id, BookingStatus::Cancelled)
        .await;
    assert!(matches!(result, Err(AppError::InvalidTransition(_))));

    Ok(())
}

/// Tests that a renter can cancel their own pending booking.
///
/// Expected: Ok with status cancelled
#[tokio::test]
async fn renter_cancels_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let booking = factory::create_booking(db, renter.id, kos.id).await?;

    let cancelled = BookingService::new(db)
        .update_status(&domain(renter), booking.id, BookingStatus::Cancelled)
        .await?;

    assert_eq!(cancelled.booking.status, BookingStatus::Cancelled);

    Ok(())
}

/// Tests confirming a booking that overlaps an already confirmed one.
///
/// Expected: Err(Conflict) and the booking stays pending
#[tokio::test]
async fn confirm_rechecks_confirmed_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;
    let a = factory::create_renter(db).await?;
    let b = factory::create_renter(db).await?;
    BookingFactory::new(db, a.id, kos.id)
        .check_in(date(2026, 3, 1))
        .months(2)
        .status("confirmed")
        .build()
        .await?;
    let pending = BookingFactory::new(db, b.id, kos.id)
        .check_in(date(2026, 4, 1))
        .months(2)
        .build()
        .await?;

    let service = BookingService::new(db);
    let seller = domain(seller);
    let result = service
        .update_status(&seller, pending.id, BookingStatus::Confirmed)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(
        service.get(&seller, pending.id).await?.booking.status,
        BookingStatus::Pending
    );

    Ok(())
}

/// Tests the lazy completion sweep run by the listing.
///
/// Expected: elapsed confirmed booking shows up as completed
#[tokio::test]
async fn listing_completes_elapsed_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    BookingFactory::new(db, renter.id, kos.id)
        .check_in(date(2025, 11, 1))
        .status("confirmed")
        .build()
        .await?;

    let (bookings, total) = BookingService::new(db)
        .get_paginated(&domain(renter), None, PageRequest::default(), today())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(bookings[0].booking.status, BookingStatus::Completed);

    Ok(())
}

/// Tests booking detail access.
///
/// Expected: renter and owner may read, another renter is forbidden
#[tokio::test]
async fn restricts_detail_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let stranger = factory::create_renter(db).await?;
    let booking = factory::create_booking(db, renter.id, kos.id).await?;

    let service = BookingService::new(db);

    assert!(service.get(&domain(renter), booking.id).await.is_ok());
    assert!(service.get(&domain(seller), booking.id).await.is_ok());
    assert!(matches!(
        service.get(&domain(stranger), booking.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.get(&domain(factory::create_admin(db).await?), 999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
