use super::*;

/// Tests soft-deleting a listing.
///
/// Verifies that the listing disappears from active lookups but is still
/// reachable by plain id lookup.
///
/// Expected: Ok(true), then Ok(false) on repeat
#[tokio::test]
async fn hides_deleted_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, post, kos) = factory::create_kos_with_owner(db).await?;
    let repo = KosRepository::new(db);

    assert!(repo.soft_delete(post.id, seller.id).await?);
    assert!(!repo.soft_delete(post.id, seller.id).await?);

    assert!(repo.find_active_by_id(kos.id).await?.is_none());
    assert!(repo.find_by_id(kos.id).await?.unwrap().is_deleted());
    assert_eq!(repo.count_active().await?, 0);

    Ok(())
}
