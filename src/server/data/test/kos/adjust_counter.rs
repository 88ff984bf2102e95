use super::*;

/// Tests incrementing and decrementing post counters.
///
/// Expected: favorite_count 2 after two increments and one decrement from 1
#[tokio::test]
async fn adjusts_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post, kos) = factory::create_kos_with_owner(db).await?;
    let repo = KosRepository::new(db);

    repo.adjust_counter(post.id, PostCounter::Favorite, 1).await?;
    repo.adjust_counter(post.id, PostCounter::Favorite, 1).await?;
    repo.adjust_counter(post.id, PostCounter::Favorite, -1).await?;
    repo.adjust_counter(post.id, PostCounter::Review, 1).await?;

    let kos = repo.find_by_id(kos.id).await?.unwrap();
    assert_eq!(kos.favorite_count, 1);
    assert_eq!(kos.review_count, 1);

    Ok(())
}

/// Tests that a decrement never takes a counter below zero.
///
/// Expected: review_count stays 0
#[tokio::test]
async fn never_goes_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post, kos) = factory::create_kos_with_owner(db).await?;
    let repo = KosRepository::new(db);

    repo.adjust_counter(post.id, PostCounter::Review, -1).await?;

    assert_eq!(repo.find_by_id(kos.id).await?.unwrap().review_count, 0);

    Ok(())
}

/// Tests the view counter.
///
/// Expected: view_count increases by one per call
#[tokio::test]
async fn increments_view_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post, kos) = factory::create_kos_with_owner(db).await?;
    let repo = KosRepository::new(db);

    repo.increment_view_count(post.id).await?;
    repo.increment_view_count(post.id).await?;

    assert_eq!(repo.find_by_id(kos.id).await?.unwrap().view_count, 2);

    Ok(())
}
