use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the provided fields change and that a blank contact clears it.
///
/// Expected: Ok(Some) with name changed and contact cleared
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_renter(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParam {
                name: Some("Dewi".to_string()),
                contact: Some("  ".to_string()),
                role: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Dewi");
    assert_eq!(updated.contact, None);
    assert_eq!(updated.role, UserRole::Renter);
    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UpdateUserParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests replacing the password hash.
///
/// Expected: Ok with new hash stored
#[tokio::test]
async fn updates_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_renter(db).await?;
    let repo = UserRepository::new(db);
    repo.update_password(user.id, "new-hash".to_string()).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}
