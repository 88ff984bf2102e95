//! HTTP request handlers.
//!
//! Controllers authenticate the caller with `AuthGuard`, convert DTOs to service
//! parameters, call one service and wrap the result in `ApiResponse`. Ownership
//! and relationship rules live in the services.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod favorite;
pub mod geocode;
pub mod kos;
pub mod photo;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
