use super::*;

/// Tests anonymous and authenticated callers on public endpoints.
///
/// Expected: None without a token or with a bad one, Some(user) with a valid token
#[tokio::test]
async fn identifies_caller_when_possible() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();

    let anonymous = HeaderMap::new();
    assert!(AuthGuard::new(db, &settings, &anonymous)
        .optional()
        .await?
        .is_none());

    let mut garbage = HeaderMap::new();
    garbage.insert("cookie", HeaderValue::from_static("kosera_token=not-a-jwt"));
    assert!(AuthGuard::new(db, &settings, &garbage)
        .optional()
        .await?
        .is_none());

    let renter = factory::create_renter(db).await?;
    let renter_id = renter.id;
    let headers = bearer_for(renter, &settings);
    let user = AuthGuard::new(db, &settings, &headers).optional().await?;
    assert_eq!(user.map(|u| u.id), Some(renter_id));

    Ok(())
}
