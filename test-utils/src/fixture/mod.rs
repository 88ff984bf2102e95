//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to
//! unit test domain conversions and DTO mapping.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let booking = fixture::booking::entity();
//! ```

pub mod booking;
pub mod kos;
pub mod user;
