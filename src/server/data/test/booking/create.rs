use super::*;

/// Tests inserting a booking.
///
/// Expected: Ok with status pending and the given dates and price
#[tokio::test]
async fn creates_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(NewBooking {
            user_id: renter.id,
            kos_id: kos.id,
            check_in_date: date(2026, 1, 31),
            check_out_date: date(2026, 2, 28),
            duration_months: 1,
            total_price: 1_000_000,
            notes: Some("Datang sore".to_string()),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.check_out_date, date(2026, 2, 28));
    assert_eq!(booking.total_price, 1_000_000);

    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.notes.as_deref(), Some("Datang sore"));

    Ok(())
}

/// Tests changing a booking's status.
///
/// Expected: Ok with the new status persisted
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let booking = factory::create_booking(db, renter.id, kos.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_status(booking.id, BookingStatus::Confirmed)
        .await?;

    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert_eq!(
        repo.find_by_id(booking.id).await?.unwrap().status,
        BookingStatus::Confirmed
    );

    Ok(())
}
