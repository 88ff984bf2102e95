use super::*;

/// Tests removing a favorite.
///
/// Expected: Ok(true) the first time, Ok(false) after
#[tokio::test]
async fn deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let renter = factory::create_renter(db).await?;
    factory::create_favorite(db, renter.id, kos.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.delete(renter.id, kos.id).await?);
    assert!(!repo.delete(renter.id, kos.id).await?);
    assert!(!repo.exists(renter.id, kos.id).await?);

    Ok(())
}
