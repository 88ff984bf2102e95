use super::*;

/// Tests changing the rating and clearing the comment.
///
/// Expected: Ok(Some) with new rating and no comment
#[tokio::test]
async fn updates_rating_and_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let review = factory::review::ReviewFactory::new(db, renter.id, kos.id)
        .comment("Lumayan")
        .build()
        .await?;

    let updated = ReviewRepository::new(db)
        .update(review.id, Some(2), Some(String::new()))
        .await?
        .unwrap();

    assert_eq!(updated.rating, 2);
    assert_eq!(updated.comment, None);

    Ok(())
}

/// Tests updating a missing review.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReviewRepository::new(db).update(5, Some(3), None).await?;

    assert!(result.is_none());

    Ok(())
}
