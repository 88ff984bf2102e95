use super::*;

/// Tests that soft-deleted listings and listings of deleted owners are hidden.
///
/// Expected: only the active listing of the active owner
#[tokio::test]
async fn excludes_deleted_listings_and_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let (_, visible) = factory::create_kos(db, seller.id).await?;
    KosFactory::new(db, seller.id).deleted(true).build().await?;

    let gone = factory::user::UserFactory::new(db)
        .role("SELLER")
        .deleted(true)
        .build()
        .await?;
    factory::create_kos(db, gone.id).await?;

    let (kos, total) = KosRepository::new(db)
        .search(&KosFilter::default(), PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(kos[0].id, visible.id);

    Ok(())
}

/// Tests the field filters together.
///
/// Expected: only the listing matching city, type, price range and availability
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let (_, wanted) = KosFactory::new(db, seller.id)
        .city("Bandung")
        .kos_type("putri")
        .price(900_000)
        .total_rooms(5)
        .occupied_rooms(4)
        .build()
        .await?;
    KosFactory::new(db, seller.id)
        .city("Bandung")
        .kos_type("putri")
        .price(900_000)
        .total_rooms(5)
        .occupied_rooms(5)
        .build()
        .await?;
    KosFactory::new(db, seller.id)
        .city("Bandung")
        .kos_type("putra")
        .price(900_000)
        .build()
        .await?;
    KosFactory::new(db, seller.id)
        .city("Bandung")
        .kos_type("putri")
        .price(3_000_000)
        .build()
        .await?;
    KosFactory::new(db, seller.id)
        .city("Surabaya")
        .kos_type("putri")
        .price(900_000)
        .build()
        .await?;

    let filter = KosFilter {
        city: Some("bandung".to_string()),
        kos_type: Some(KosType::Putri),
        min_price: Some(500_000),
        max_price: Some(1_000_000),
        available_only: true,
        ..Default::default()
    };
    let (kos, total) = KosRepository::new(db)
        .search(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(kos[0].id, wanted.id);

    Ok(())
}

/// Tests free-text search over title, address and city.
///
/// Expected: listings matching on title and on address, not the other one
#[tokio::test]
async fn searches_title_and_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    KosFactory::new(db, seller.id)
        .title("Kos Mawar Asri")
        .build()
        .await?;
    KosFactory::new(db, seller.id)
        .address("Jl. Mawar No. 3")
        .build()
        .await?;
    KosFactory::new(db, seller.id)
        .title("Kos Kenanga")
        .build()
        .await?;

    let filter = KosFilter {
        q: Some("Mawar".to_string()),
        ..Default::default()
    };
    let (_, total) = KosRepository::new(db)
        .search(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests price sorting in both directions.
///
/// Expected: ascending then descending order of price
#[tokio::test]
async fn sorts_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    for price in [1_200_000, 800_000, 2_500_000] {
        KosFactory::new(db, seller.id).price(price).build().await?;
    }

    let repo = KosRepository::new(db);
    let prices = |sort| {
        let filter = KosFilter {
            sort,
            ..Default::default()
        };
        let repo = &repo;
        async move {
            let (kos, _) = repo.search(&filter, PageRequest::default()).await?;
            Ok::<_, DbErr>(kos.into_iter().map(|k| k.price).collect::<Vec<_>>())
        }
    };

    assert_eq!(prices(KosSort::PriceAsc).await?, vec![800_000, 1_200_000, 2_500_000]);
    assert_eq!(prices(KosSort::PriceDesc).await?, vec![2_500_000, 1_200_000, 800_000]);

    Ok(())
}

/// Tests ordering by average rating and by quality score.
///
/// The reviewed listing outranks the unreviewed one on both sorts, and the
/// popular sort follows view count.
///
/// Expected: reviewed listing first for rating and quality, viewed first for popular
#[tokio::test]
async fn sorts_by_rating_quality_and_popularity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_kos_tables()
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let renter = factory::create_renter(db).await?;
    let (_, reviewed) = KosFactory::new(db, seller.id).build().await?;
    let (_, viewed) = KosFactory::new(db, seller.id).view_count(3).build().await?;
    factory::review::ReviewFactory::new(db, renter.id, reviewed.id)
        .rating(5)
        .build()
        .await?;

    let repo = KosRepository::new(db);
    let first = |sort| {
        let filter = KosFilter {
            sort,
            ..Default::default()
        };
        let repo = &repo;
        async move {
            let (kos, _) = repo.search(&filter, PageRequest::default()).await?;
            Ok::<_, DbErr>(kos[0].id)
        }
    };

    assert_eq!(first(KosSort::Rating).await?, reviewed.id);
    assert_eq!(first(KosSort::Quality).await?, reviewed.id);
    assert_eq!(first(KosSort::Popular).await?, viewed.id);

    Ok(())
}

/// Tests restricting results to one owner's listings.
///
/// Expected: only the owner's listing
#[tokio::test]
async fn filters_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _, mine) = factory::create_kos_with_owner(db).await?;
    factory::create_kos_with_owner(db).await?;

    let filter = KosFilter {
        owner_id: Some(seller.id),
        ..Default::default()
    };
    let (kos, total) = KosRepository::new(db)
        .search(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(kos[0].id, mine.id);

    Ok(())
}
