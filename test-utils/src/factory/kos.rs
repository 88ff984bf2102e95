//! Kos factory for creating a post together with its kos row.
//!
//! A listing is always a pair: the `posts` row renters see and the `kos` row
//! describing the building. The factory inserts both and returns them together.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::kos::KosFactory;
///
/// let (post, kos) = KosFactory::new(&db, seller.id)
///     .city("Bandung")
///     .price(1_500_000)
///     .total_rooms(4)
///     .build()
///     .await?;
/// ```
pub struct KosFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    description: Option<String>,
    price: i64,
    address: String,
    city: String,
    total_rooms: i32,
    occupied_rooms: i32,
    latitude: Option<f64>,
    longitude: Option<f64>,
    facilities: Option<String>,
    kos_type: String,
    view_count: i32,
    deleted: bool,
}

impl<'a> KosFactory<'a> {
    /// Creates a new KosFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Kos {id}"`
    /// - price: `1_000_000`
    /// - address: `"Jl. Contoh No. {id}"`
    /// - city: `"Jakarta"`
    /// - total_rooms: `10`, occupied_rooms: `0`
    /// - kos_type: `"campur"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Kos {}", id),
            description: None,
            price: 1_000_000,
            address: format!("Jl. Contoh No. {}", id),
            city: "Jakarta".to_string(),
            total_rooms: 10,
            occupied_rooms: 0,
            latitude: None,
            longitude: None,
            facilities: None,
            kos_type: "campur".to_string(),
            view_count: 0,
            deleted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn total_rooms(mut self, total_rooms: i32) -> Self {
        self.total_rooms = total_rooms;
        self
    }

    pub fn occupied_rooms(mut self, occupied_rooms: i32) -> Self {
        self.occupied_rooms = occupied_rooms;
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn facilities(mut self, facilities: impl Into<String>) -> Self {
        self.facilities = Some(facilities.into());
        self
    }

    /// Sets the stored kos type (`putra`, `putri` or `campur`).
    pub fn kos_type(mut self, kos_type: impl Into<String>) -> Self {
        self.kos_type = kos_type.into();
        self
    }

    pub fn view_count(mut self, view_count: i32) -> Self {
        self.view_count = view_count;
        self
    }

    /// Marks the post as soft-deleted.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the post and kos rows.
    ///
    /// # Returns
    /// - `Ok((entity::post::Model, entity::kos::Model))` - Created listing
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<(entity::post::Model, entity::kos::Model), DbErr> {
        let now = Utc::now();
        let post = entity::post::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            view_count: ActiveValue::Set(self.view_count),
            favorite_count: ActiveValue::Set(0),
            review_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            deleted_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let kos = entity::kos::ActiveModel {
            post_id: ActiveValue::Set(post.id),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            total_rooms: ActiveValue::Set(self.total_rooms),
            occupied_rooms: ActiveValue::Set(self.occupied_rooms),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            facilities: ActiveValue::Set(self.facilities),
            kos_type: ActiveValue::Set(self.kos_type),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((post, kos))
    }
}

/// Creates a listing with default values owned by `user_id`.
pub async fn create_kos(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(entity::post::Model, entity::kos::Model), DbErr> {
    KosFactory::new(db, user_id).build().await
}
