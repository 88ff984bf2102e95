use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{error::AppError, model::user::User};

mod booking;

/// Converts a factory-made user row into the domain model services take.
fn domain(user: entity::user::Model) -> User {
    User::from_entity(user).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn post_counts(db: &DatabaseConnection, kos_id: i32) -> Result<(i32, i32), AppError> {
    let kos = crate::server::data::kos::KosRepository::new(db)
        .find_by_id(kos_id)
        .await?
        .unwrap();

    Ok((kos.favorite_count, kos.review_count))
}
