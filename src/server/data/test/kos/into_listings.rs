use super::*;

/// Tests enriching listings with owner, rating and primary photo.
///
/// Expected: average of 4 and 5 is 4.5, primary photo attached, order preserved
#[tokio::test]
async fn attaches_owner_rating_and_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, first) = factory::create_kos_with_owner(db).await?;
    let (_, second) = factory::create_kos(db, seller.id).await?;
    let a = factory::create_renter(db).await?;
    let b = factory::create_renter(db).await?;
    factory::review::ReviewFactory::new(db, a.id, first.id)
        .rating(4)
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, b.id, first.id)
        .rating(5)
        .build()
        .await?;
    let photo = factory::kos_photo::KosPhotoFactory::new(db, first.id)
        .primary(true)
        .build()
        .await?;
    factory::create_photo(db, first.id).await?;

    let repo = KosRepository::new(db);
    let kos = repo.find_many(vec![first.id, second.id]).await?;
    let ordered = vec![kos[&second.id].clone(), kos[&first.id].clone()];

    let listings = repo.into_listings(ordered).await?;

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].kos.id, second.id);
    assert_eq!(listings[0].average_rating, 0.0);
    assert!(listings[0].primary_photo.is_none());

    assert_eq!(listings[1].owner.id, seller.id);
    assert_eq!(listings[1].average_rating, 4.5);
    assert_eq!(listings[1].primary_photo.as_ref().map(|p| p.id), Some(photo.id));

    Ok(())
}
