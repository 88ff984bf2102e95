use super::*;

/// Tests the dashboard counts.
///
/// Deleted users and listings are not counted as active.
///
/// Expected: counts per role, active listings, bookings per status and totals
#[tokio::test]
async fn counts_platform_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;
    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;
    KosFactory::new(db, seller.id).deleted(true).build().await?;
    let renter = factory::create_renter(db).await?;
    factory::user::UserFactory::new(db)
        .role("RENTER")
        .deleted(true)
        .build()
        .await?;

    factory::create_booking(db, renter.id, kos.id).await?;
    BookingFactory::new(db, renter.id, kos.id)
        .status("completed")
        .build()
        .await?;
    factory::create_review(db, renter.id, kos.id).await?;
    factory::create_favorite(db, renter.id, kos.id).await?;

    let stats = StatsRepository::new(db).platform().await?;

    assert_eq!(stats.users_by_role[&UserRole::Admin], 1);
    assert_eq!(stats.users_by_role[&UserRole::Seller], 1);
    assert_eq!(stats.users_by_role[&UserRole::Renter], 1);
    assert_eq!(stats.active_listings, 1);
    assert_eq!(stats.bookings_by_status[&BookingStatus::Pending], 1);
    assert_eq!(stats.bookings_by_status[&BookingStatus::Completed], 1);
    assert_eq!(stats.bookings_by_status[&BookingStatus::Cancelled], 0);
    assert_eq!(stats.total_reviews, 1);
    assert_eq!(stats.total_favorites, 1);

    Ok(())
}
