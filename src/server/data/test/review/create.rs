use super::*;

/// Tests creating a review.
///
/// Expected: Ok with reviewer name attached
#[tokio::test]
async fn creates_review_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::user::UserFactory::new(db)
        .name("Putri Ayu")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(renter.id, kos.id, 4, Some("Bersih dan tenang".to_string()))
        .await?;

    assert_eq!(review.rating, 4);
    assert_eq!(review.reviewer_name, "Putri Ayu");
    assert!(repo.exists_for_user(renter.id, kos.id).await?);

    Ok(())
}
