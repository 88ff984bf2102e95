//! Favorite factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a favorite linking `user_id` to `kos_id`.
///
/// Does not touch the post's `favorite_count`; tests that care about the
/// counter go through the favorite service instead.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    kos_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        kos_id: ActiveValue::Set(kos_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
