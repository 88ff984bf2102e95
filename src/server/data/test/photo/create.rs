use super::*;

/// Tests recording an uploaded photo.
///
/// Expected: Ok and the photo is listed and counted for the kos
#[tokio::test]
async fn creates_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;

    let repo = PhotoRepository::new(db);
    let photo = repo
        .create(CreatePhotoParam {
            kos_id: kos.id,
            url: "https://res.cloudinary.com/demo/image/upload/v1/kosera/a.jpg".to_string(),
            public_id: Some("kosera/a".to_string()),
            is_primary: true,
        })
        .await?;

    assert!(photo.is_primary);
    assert_eq!(repo.count_by_kos(kos.id).await?, 1);
    assert_eq!(repo.list_by_kos(kos.id).await?[0].id, photo.id);

    Ok(())
}

/// Tests that the primary photo is listed first.
///
/// Expected: primary photo before older non-primary photos
#[tokio::test]
async fn lists_primary_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;
    factory::create_photo(db, kos.id).await?;
    let primary = KosPhotoFactory::new(db, kos.id).primary(true).build().await?;

    let photos = PhotoRepository::new(db).list_by_kos(kos.id).await?;

    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].id, primary.id);

    Ok(())
}
