//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! rules that span more than one row: booking status transitions and overlap
//! checks, listing ownership, post counters and the primary photo. Operations
//! that read then write run inside one database transaction.

pub mod auth;
pub mod booking;
pub mod favorite;
pub mod geocode;
pub mod kos;
pub mod photo;
pub mod review;
pub mod stats;
pub mod user;

#[cfg(test)]
mod test;
