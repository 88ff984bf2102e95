use super::*;

/// Tests switching the primary photo.
///
/// Expected: exactly one primary photo, the one chosen
#[tokio::test]
async fn leaves_single_primary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    KosPhotoFactory::new(db, kos.id).primary(true).build().await?;
    let chosen = factory::create_photo(db, kos.id).await?;

    let repo = PhotoRepository::new(db);
    repo.set_primary(kos.id, chosen.id).await?;

    let primaries: Vec<i32> = repo
        .list_by_kos(kos.id)
        .await?
        .into_iter()
        .filter(|p| p.is_primary)
        .map(|p| p.id)
        .collect();

    assert_eq!(primaries, vec![chosen.id]);

    Ok(())
}

/// Tests that another kos keeps its primary photo.
///
/// Expected: other kos still has its primary
#[tokio::test]
async fn does_not_touch_other_kos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, kos) = factory::create_kos_with_owner(db).await?;
    let (_, other) = factory::create_kos(db, seller.id).await?;
    let other_primary = KosPhotoFactory::new(db, other.id).primary(true).build().await?;
    let chosen = factory::create_photo(db, kos.id).await?;

    let repo = PhotoRepository::new(db);
    repo.set_primary(kos.id, chosen.id).await?;

    assert!(repo.find_by_id(other_primary.id).await?.unwrap().is_primary);

    Ok(())
}
