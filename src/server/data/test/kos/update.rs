use super::*;

/// Tests updating fields across both the post and kos rows.
///
/// Expected: Ok(Some) with new price and room count, title unchanged
#[tokio::test]
async fn updates_post_and_kos_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post, kos) = factory::create_kos_with_owner(db).await?;

    let updated = KosRepository::new(db)
        .update(
            kos.id,
            UpdateKosParam {
                price: Some(2_000_000),
                total_rooms: Some(20),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 2_000_000);
    assert_eq!(updated.total_rooms, 20);
    assert_eq!(updated.title, post.title);

    Ok(())
}

/// Tests an update touching only post fields.
///
/// Expected: Ok(Some) with kos row unchanged
#[tokio::test]
async fn updates_post_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, kos) = factory::create_kos_with_owner(db).await?;

    let updated = KosRepository::new(db)
        .update(
            kos.id,
            UpdateKosParam {
                title: Some("Kos Anggrek".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Kos Anggrek");
    assert_eq!(updated.city, kos.city);

    Ok(())
}

/// Tests updating a kos that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_kos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = KosRepository::new(db)
        .update(42, UpdateKosParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
