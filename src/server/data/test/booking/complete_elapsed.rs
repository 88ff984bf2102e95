use super::*;

/// Tests completing confirmed bookings whose stay has ended.
///
/// Only confirmed bookings with a check-out before today change; a stay ending
/// today and a pending stay in the past are left alone.
///
/// Expected: Ok(1) and only the elapsed confirmed booking completed
#[tokio::test]
async fn completes_only_elapsed_confirmed_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;

    let elapsed = BookingFactory::new(db, renter.id, kos.id)
        .check_in(date(2026, 1, 1))
        .status("confirmed")
        .build()
        .await?;
    let ends_today = BookingFactory::new(db, renter.id, kos.id)
        .check_in(date(2026, 2, 1))
        .status("confirmed")
        .build()
        .await?;
    let stale_pending = BookingFactory::new(db, renter.id, kos.id)
        .check_in(date(2026, 1, 1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let completed = repo.complete_elapsed(date(2026, 3, 1)).await?;

    assert_eq!(completed, 1);
    let status = |id| {
        let repo = &repo;
        async move { Ok::<_, DbErr>(repo.find_by_id(id).await?.unwrap().status) }
    };
    assert_eq!(status(elapsed.id).await?, BookingStatus::Completed);
    assert_eq!(status(ends_today.id).await?, BookingStatus::Confirmed);
    assert_eq!(status(stale_pending.id).await?, BookingStatus::Pending);

    Ok(())
}
