use super::*;

/// Tests deleting the primary photo and promoting the oldest remaining one.
///
/// Expected: oldest remaining photo becomes primary
#[tokio::test]
async fn promotes_oldest_after_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let primary = KosPhotoFactory::new(db, kos.id).primary(true).build().await?;
    let oldest = factory::create_photo(db, kos.id).await?;
    factory::create_photo(db, kos.id).await?;

    let repo = PhotoRepository::new(db);
    assert!(repo.delete(primary.id).await?);
    let promoted = repo.promote_oldest(kos.id).await?;

    assert_eq!(promoted, Some(oldest.id));
    assert!(repo.find_by_id(oldest.id).await?.unwrap().is_primary);

    Ok(())
}

/// Tests promotion when nothing is left.
///
/// Expected: Ok(None)
#[tokio::test]
async fn promotes_nothing_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    let photo = factory::create_photo(db, kos.id).await?;

    let repo = PhotoRepository::new(db);
    assert!(repo.delete(photo.id).await?);
    assert!(!repo.delete(photo.id).await?);

    assert_eq!(repo.promote_oldest(kos.id).await?, None);

    Ok(())
}
