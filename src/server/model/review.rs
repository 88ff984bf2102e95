//! Review domain model.

use chrono::{DateTime, Utc};

use crate::model::review::{ReviewDto, ReviewerDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub kos_id: i32,
    pub user_id: i32,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Converts a review row and its author at the repository boundary.
    pub fn from_entity(entity: entity::review::Model, author: &entity::user::Model) -> Self {
        Self {
            id: entity.id,
            kos_id: entity.kos_id,
            user_id: entity.user_id,
            reviewer_name: author.name.clone(),
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            kos_id: self.kos_id,
            user: ReviewerDto {
                id: self.user_id,
                name: self.reviewer_name,
            },
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
