use super::*;

/// Tests detecting an active admin.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    assert!(UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests that soft-deleted admins are ignored.
///
/// Verifies first-time setup still seeds an admin when the only admin was deleted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_deleted_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_renter(db).await?;
    factory::user::UserFactory::new(db)
        .role("ADMIN")
        .deleted(true)
        .build()
        .await?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}
