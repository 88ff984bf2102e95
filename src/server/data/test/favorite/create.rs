use super::*;

/// Tests adding a favorite.
///
/// Expected: Ok and `exists` reports it
#[tokio::test]
async fn creates_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo.create(renter.id, kos.id).await?;

    assert_eq!(favorite.kos_id, kos.id);
    assert!(repo.exists(renter.id, kos.id).await?);

    Ok(())
}
