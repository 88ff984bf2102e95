//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let review = ReviewFactory::new(&db, renter.id, kos.id)
///     .rating(4)
///     .comment("Bersih")
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kos_id: i32,
    rating: i32,
    comment: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with a rating of `5` and no comment.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, kos_id: i32) -> Self {
        Self {
            db,
            user_id,
            kos_id,
            rating: 5,
            comment: None,
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            kos_id: ActiveValue::Set(self.kos_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a five-star review without a comment.
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: i32,
    kos_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, user_id, kos_id).build().await
}
