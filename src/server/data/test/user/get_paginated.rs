use super::*;

/// Tests filtering users by role and excluding deleted users.
///
/// Expected: Ok with only the active seller
#[tokio::test]
async fn filters_by_role_and_hides_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_renter(db).await?;
    let seller = factory::create_seller(db).await?;
    factory::user::UserFactory::new(db)
        .role("SELLER")
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let filter = UserFilter {
        role: Some(UserRole::Seller),
        ..Default::default()
    };
    let (users, total) = repo.get_paginated(&filter, PageRequest::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, seller.id);

    let filter = UserFilter {
        role: Some(UserRole::Seller),
        include_deleted: true,
        ..Default::default()
    };
    let (_, total) = repo.get_paginated(&filter, PageRequest::default()).await?;
    assert_eq!(total, 2);

    Ok(())
}

/// Tests the free-text filter against name and username.
///
/// Expected: Ok with the matching user only
#[tokio::test]
async fn searches_name_and_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Rina Kusuma")
        .build()
        .await?;
    factory::create_renter(db).await?;

    let filter = UserFilter {
        q: Some("Kusuma".to_string()),
        ..Default::default()
    };
    let (users, total) = UserRepository::new(db)
        .get_paginated(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].name, "Rina Kusuma");

    Ok(())
}

/// Tests splitting results into pages.
///
/// Expected: 3 users on page 1 of size 2 gives 2 items, page 2 gives 1
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_renter(db).await?;
    }

    let repo = UserRepository::new(db);
    let filter = UserFilter::default();

    let (first, total) = repo.get_paginated(&filter, PageRequest::new(Some(1), Some(2))).await?;
    let (second, _) = repo.get_paginated(&filter, PageRequest::new(Some(2), Some(2))).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}
