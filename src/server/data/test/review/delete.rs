use super::*;

/// Tests deleting a review.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    let review = factory::create_review(db, renter.id, kos.id).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.delete(review.id).await?);
    assert!(!repo.delete(review.id).await?);
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}
