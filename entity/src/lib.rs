//! SeaORM entities for the Kosera schema.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its
//! PascalCase name so callers can write `entity::prelude::Booking::find()`.

pub mod booking;
pub mod favorite;
pub mod kos;
pub mod kos_photo;
pub mod post;
pub mod prelude;
pub mod review;
pub mod user;
