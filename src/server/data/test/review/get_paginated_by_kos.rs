use super::*;

/// Tests listing the reviews of one kos.
///
/// Expected: Ok with the two reviews of that kos only
#[tokio::test]
async fn lists_reviews_of_kos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;
    let (_, other_kos) = factory::create_kos(db, seller.id).await?;
    let a = factory::create_renter(db).await?;
    let b = factory::create_renter(db).await?;

    factory::create_review(db, a.id, kos.id).await?;
    factory::create_review(db, b.id, kos.id).await?;
    factory::create_review(db, a.id, other_kos.id).await?;

    let (reviews, total) = ReviewRepository::new(db)
        .get_paginated_by_kos(kos.id, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    assert!(reviews.iter().all(|r| r.kos_id == kos.id));
    assert!(reviews.iter().any(|r| r.reviewer_name == a.name));

    Ok(())
}
