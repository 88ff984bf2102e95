use super::*;

/// Tests creating a post and its kos row together.
///
/// Verifies that counters start at zero and the owner is the creating seller.
///
/// Expected: Ok with merged listing
#[tokio::test]
async fn creates_post_and_kos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;

    let repo = KosRepository::new(db);
    let kos = repo
        .create(CreateKosParam {
            owner_id: seller.id,
            title: "Kos Melati".to_string(),
            description: Some("Dekat kampus".to_string()),
            price: 1_500_000,
            address: "Jl. Kaliurang 12".to_string(),
            city: "Yogyakarta".to_string(),
            total_rooms: 12,
            occupied_rooms: 2,
            latitude: Some(-7.75),
            longitude: Some(110.38),
            facilities: Some("WiFi, AC".to_string()),
            kos_type: KosType::Putri,
        })
        .await?;

    assert_eq!(kos.owner_id, seller.id);
    assert_eq!(kos.title, "Kos Melati");
    assert_eq!(kos.kos_type, KosType::Putri);
    assert_eq!(kos.available_rooms(), 10);
    assert_eq!(kos.view_count, 0);
    assert_eq!(kos.favorite_count, 0);

    let found = repo.find_by_id(kos.id).await?.unwrap();
    assert_eq!(found.post_id, kos.post_id);
    assert_eq!(found.facilities.as_deref(), Some("WiFi, AC"));

    Ok(())
}
