use super::*;

const ACTIVE: [BookingStatus; 2] = [BookingStatus::Pending, BookingStatus::Confirmed];

/// Existing booking March through May 2026 on a fresh kos.
async fn setup(
    db: &sea_orm::DatabaseConnection,
    status: &str,
) -> Result<(i32, i32), DbErr> {
    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let booking = BookingFactory::new(db, renter.id, kos.id)
        .check_in(date(2026, 3, 1))
        .months(2)
        .status(status)
        .build()
        .await?;

    Ok((kos.id, booking.id))
}

/// Tests the three overlap shapes.
///
/// A new range that starts inside, ends inside, or encloses the existing booking
/// each counts as an overlap.
///
/// Expected: true for every shape
#[tokio::test]
async fn detects_each_overlap_shape() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (kos_id, _) = setup(db, "pending").await?;
    let repo = BookingRepository::new(db);

    let ranges = [
        (date(2026, 4, 1), date(2026, 6, 1)),
        (date(2026, 2, 1), date(2026, 3, 15)),
        (date(2026, 2, 1), date(2026, 6, 1)),
        (date(2026, 3, 10), date(2026, 4, 10)),
    ];
    for (check_in, check_out) in ranges {
        assert!(
            repo.has_overlap(kos_id, check_in, check_out, &ACTIVE, None)
                .await?,
            "{check_in}..{check_out} should overlap"
        );
    }

    Ok(())
}

/// Tests ranges that only touch the existing booking.
///
/// Expected: false when the new stay ends on check-in or starts on check-out
#[tokio::test]
async fn allows_adjacent_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (kos_id, _) = setup(db, "confirmed").await?;
    let repo = BookingRepository::new(db);

    assert!(
        !repo
            .has_overlap(kos_id, date(2026, 2, 1), date(2026, 3, 1), &ACTIVE, None)
            .await?
    );
    assert!(
        !repo
            .has_overlap(kos_id, date(2026, 5, 1), date(2026, 6, 1), &ACTIVE, None)
            .await?
    );

    Ok(())
}

/// Tests that only the requested statuses count.
///
/// Expected: cancelled booking never overlaps; pending overlaps only when pending is checked
#[tokio::test]
async fn ignores_other_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (cancelled_kos, _) = setup(db, "cancelled").await?;
    let (pending_kos, _) = setup(db, "pending").await?;
    let repo = BookingRepository::new(db);
    let range = (date(2026, 3, 1), date(2026, 4, 1));

    assert!(
        !repo
            .has_overlap(cancelled_kos, range.0, range.1, &ACTIVE, None)
            .await?
    );
    assert!(
        !repo
            .has_overlap(pending_kos, range.0, range.1, &[BookingStatus::Confirmed], None)
            .await?
    );

    Ok(())
}

/// Tests excluding the booking being confirmed from its own check.
///
/// Expected: false when the only overlapping booking is excluded
#[tokio::test]
async fn excludes_given_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (kos_id, booking_id) = setup(db, "pending").await?;

    let overlap = BookingRepository::new(db)
        .has_overlap(
            kos_id,
            date(2026, 3, 1),
            date(2026, 5, 1),
            &ACTIVE,
            Some(booking_id),
        )
        .await?;

    assert!(!overlap);

    Ok(())
}
