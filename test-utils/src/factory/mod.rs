//! Factories for inserting test rows with sensible defaults.
//!
//! Each factory exposes a builder (`XFactory::new(db)...build()`) for tests that
//! need specific field values, plus `create_*` shorthands for the common case.

pub mod booking;
pub mod favorite;
pub mod helpers;
pub mod kos;
pub mod kos_photo;
pub mod review;
pub mod user;

pub use booking::create_booking;
pub use favorite::create_favorite;
pub use helpers::{create_kos_with_owner, next_id};
pub use kos::create_kos;
pub use kos_photo::create_photo;
pub use review::create_review;
pub use user::{create_admin, create_renter, create_seller, create_user};
