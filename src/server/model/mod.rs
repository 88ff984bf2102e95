//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Stored enum columns (roles, kos
//! types, booking statuses) are parsed here so services only see typed values.

pub mod booking;
pub mod favorite;
pub mod kos;
pub mod photo;
pub mod review;
pub mod stats;
pub mod user;
