use super::*;

/// Tests listing a user's favorites with their listings.
///
/// Favorites on deleted listings and other users' favorites are excluded.
///
/// Expected: Ok with the one active favorite
#[tokio::test]
async fn lists_favorites_on_active_listings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let (_, active) = factory::create_kos(db, seller.id).await?;
    let (_, deleted) = KosFactory::new(db, seller.id).deleted(true).build().await?;
    let renter = factory::create_renter(db).await?;
    let other = factory::create_renter(db).await?;

    factory::create_favorite(db, renter.id, active.id).await?;
    factory::create_favorite(db, renter.id, deleted.id).await?;
    factory::create_favorite(db, other.id, active.id).await?;

    let (favorites, total) = FavoriteRepository::new(db)
        .get_paginated_by_user(renter.id, PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(favorites[0].listing.kos.id, active.id);
    assert_eq!(favorites[0].listing.owner.id, seller.id);
    assert_eq!(favorites[0].favorite.user_id, renter.id);

    Ok(())
}
