//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to build usernames and titles that never collide within a test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a seller together with one listing they own.
///
/// This is a convenience method that creates:
/// 1. User with the `SELLER` role
/// 2. Post owned by that user
/// 3. Kos attached to the post
///
/// # Returns
/// - `Ok((seller, post, kos))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_kos_with_owner(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::post::Model,
        entity::kos::Model,
    ),
    DbErr,
> {
    let seller = crate::factory::user::create_seller(db).await?;
    let (post, kos) = crate::factory::kos::create_kos(db, seller.id).await?;

    Ok((seller, post, kos))
}
