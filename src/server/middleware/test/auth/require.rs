use super::*;

/// Tests that requests without a token are rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &settings, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_renter(db).await?;
    let headers = bearer_for(user, &TokenSettings::new("some-other-secret", 1));

    let result = AuthGuard::new(db, &settings(), &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that tokens of soft-deleted users stop working.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let user = factory::user::UserFactory::new(db).deleted(true).build().await?;
    let user_id = user.id;
    let headers = bearer_for(user, &settings);

    let result = AuthGuard::new(db, &settings, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(id))) if id == user_id
    ));

    Ok(())
}

/// Tests the role permissions.
///
/// Expected: renters denied seller and admin access, sellers pass the seller check,
/// admins pass both
#[tokio::test]
async fn checks_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let renter = bearer_for(factory::create_renter(db).await?, &settings);
    let seller = bearer_for(factory::create_seller(db).await?, &settings);
    let admin = bearer_for(factory::create_admin(db).await?, &settings);

    let denied = |result: Result<User, AppError>| {
        matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied)))
    };

    assert!(denied(
        AuthGuard::new(db, &settings, &renter)
            .require(&[Permission::Seller])
            .await
    ));
    assert!(AuthGuard::new(db, &settings, &renter).require(&[]).await.is_ok());

    assert!(AuthGuard::new(db, &settings, &seller)
        .require(&[Permission::Seller])
        .await
        .is_ok());
    assert!(denied(
        AuthGuard::new(db, &settings, &seller)
            .require(&[Permission::Admin])
            .await
    ));

    let user = AuthGuard::new(db, &settings, &admin)
        .require(&[Permission::Seller, Permission::Admin])
        .await?;
    assert!(user.is_admin());

    Ok(())
}

/// Tests that the role is read from the database, not the token.
///
/// Expected: seller token of a user demoted to renter is denied seller access
#[tokio::test]
async fn uses_current_role() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let seller = factory::create_seller(db).await?;
    let headers = bearer_for(seller.clone(), &settings);

    entity::user::ActiveModel {
        id: ActiveValue::Unchanged(seller.id),
        role: ActiveValue::Set("RENTER".to_string()),
        ..Default::default()
    }
    .update(db)
    .await?;

    let result = AuthGuard::new(db, &settings, &headers)
        .require(&[Permission::Seller])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));

    Ok(())
}
