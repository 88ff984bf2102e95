use super::*;

/// Tests soft-deleting and restoring a user.
///
/// Verifies that deletion is recorded, repeated deletion is a no-op, and restore
/// clears the marker.
///
/// Expected: true, false, then true on restore
#[tokio::test]
async fn deletes_and_restores_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_renter(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.soft_delete(user.id, admin.id).await?);
    assert!(!repo.soft_delete(user.id, admin.id).await?);
    assert!(repo.find_by_id(user.id).await?.unwrap().is_deleted());

    assert!(repo.restore(user.id).await?);
    assert!(!repo.restore(user.id).await?);
    assert!(!repo.find_by_id(user.id).await?.unwrap().is_deleted());

    Ok(())
}
