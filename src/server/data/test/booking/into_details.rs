use super::*;

/// Tests loading a booking with its kos and renter.
///
/// Expected: Ok(Some) with kos title, owner and renter name filled in
#[tokio::test]
async fn loads_kos_and_renter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, post, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::user::UserFactory::new(db)
        .name("Andi Pratama")
        .build()
        .await?;
    let booking = factory::create_booking(db, renter.id, kos.id).await?;

    let details = BookingRepository::new(db)
        .find_details(booking.id)
        .await?
        .unwrap();

    assert_eq!(details.booking.id, booking.id);
    assert_eq!(details.kos_title, post.title);
    assert_eq!(details.kos_city, kos.city);
    assert_eq!(details.kos_owner_id, seller.id);
    assert_eq!(details.renter.name, "Andi Pratama");

    Ok(())
}

/// Tests a missing booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(BookingRepository::new(db).find_details(7).await?.is_none());

    Ok(())
}
