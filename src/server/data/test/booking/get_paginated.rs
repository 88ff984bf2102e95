use super::*;

/// Tests listing scope per role.
///
/// The seller sees bookings on their own kos, the renter their own bookings and
/// the admin everything.
///
/// Expected: seller 2, renter 1, all 3
#[tokio::test]
async fn scopes_bookings_by_caller() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;
    let (_, _, other_kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let other_renter = factory::create_renter(db).await?;

    factory::create_booking(db, renter.id, kos.id).await?;
    factory::create_booking(db, other_renter.id, kos.id).await?;
    factory::create_booking(db, other_renter.id, other_kos.id).await?;

    let repo = BookingRepository::new(db);
    let page = PageRequest::default();

    let (_, seller_total) = repo
        .get_paginated(BookingScope::Seller(seller.id), None, page)
        .await?;
    let (mine, renter_total) = repo
        .get_paginated(BookingScope::Renter(renter.id), None, page)
        .await?;
    let (_, all_total) = repo.get_paginated(BookingScope::All, None, page).await?;

    assert_eq!(seller_total, 2);
    assert_eq!(renter_total, 1);
    assert_eq!(mine[0].user_id, renter.id);
    assert_eq!(all_total, 3);

    Ok(())
}

/// Tests a seller without listings.
///
/// Expected: empty page
#[tokio::test]
async fn returns_empty_for_seller_without_kos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let idle_seller = factory::create_seller(db).await?;
    factory::create_booking(db, renter.id, kos.id).await?;

    let (bookings, total) = BookingRepository::new(db)
        .get_paginated(
            BookingScope::Seller(idle_seller.id),
            None,
            PageRequest::default(),
        )
        .await?;

    assert!(bookings.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests a seller who also rents from another seller.
///
/// Expected: bookings on their own kos and the one they placed elsewhere
#[tokio::test]
async fn seller_scope_includes_own_placed_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;
    let (_, _, other_kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    factory::create_booking(db, renter.id, kos.id).await?;
    let placed = factory::create_booking(db, seller.id, other_kos.id).await?;
    factory::create_booking(db, renter.id, other_kos.id).await?;

    let (bookings, total) = BookingRepository::new(db)
        .get_paginated(BookingScope::Seller(seller.id), None, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    assert!(bookings.iter().any(|booking| booking.id == placed.id));

    Ok(())
}

/// Tests the status filter.
///
/// Expected: only the confirmed booking
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    factory::create_booking(db, renter.id, kos.id).await?;
    let confirmed = BookingFactory::new(db, renter.id, kos.id)
        .status("confirmed")
        .build()
        .await?;

    let (bookings, total) = BookingRepository::new(db)
        .get_paginated(
            BookingScope::All,
            Some(BookingStatus::Confirmed),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(bookings[0].id, confirmed.id);

    Ok(())
}
