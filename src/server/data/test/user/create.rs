use super::*;

fn param(username: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Sari Wulandari".to_string(),
        username: username.to_string(),
        contact: Some("081234567890".to_string()),
        password_hash: "hash".to_string(),
        role: UserRole::Renter,
    }
}

/// Tests creating a user.
///
/// Verifies that the stored user carries the given fields and is not deleted.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("sari")).await?;

    assert_eq!(user.username, "sari");
    assert_eq!(user.role, UserRole::Renter);
    assert!(!user.is_deleted());

    let found = repo.find_by_username("sari").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("budi")).await?;
    let result = repo.create(param("budi")).await;

    assert!(result.is_err());

    Ok(())
}
