//! Post and kos fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::{kos, post};

pub const DEFAULT_TITLE: &str = "Kos Melati";
pub const DEFAULT_PRICE: i64 = 1_200_000;
pub const DEFAULT_CITY: &str = "Yogyakarta";

/// Creates a post entity model owned by user `1`.
pub fn post_entity() -> post::Model {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    post::Model {
        id: 1,
        user_id: 1,
        title: DEFAULT_TITLE.to_string(),
        description: Some("Dekat kampus.".to_string()),
        price: DEFAULT_PRICE,
        view_count: 0,
        favorite_count: 0,
        review_count: 0,
        created_at: at,
        updated_at: at,
        deleted_at: None,
        deleted_by: None,
    }
}

/// Creates a kos entity model attached to post `1`.
pub fn kos_entity() -> kos::Model {
    kos::Model {
        id: 1,
        post_id: 1,
        address: "Jl. Kaliurang KM 5".to_string(),
        city: DEFAULT_CITY.to_string(),
        total_rooms: 8,
        occupied_rooms: 3,
        latitude: Some(-7.7605),
        longitude: Some(110.3810),
        facilities: Some("WiFi, AC".to_string()),
        kos_type: "putri".to_string(),
    }
}
