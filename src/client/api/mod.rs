pub mod auth;
pub mod booking;
pub mod favorite;
pub mod helper;
pub mod kos;
pub mod review;
pub mod stats;
