pub mod api;
pub mod booking;
pub mod favorite;
pub mod geocode;
pub mod kos;
pub mod photo;
pub mod review;
pub mod stats;
pub mod user;
