//! Kosera Test Utils
//!
//! Shared testing utilities for the Kosera server. Provides a builder for test contexts
//! backed by in-memory SQLite databases, factories that insert rows with sensible defaults,
//! and fixtures that build entity models without touching the database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_booking() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_seller, _post, kos) = factory::helpers::create_kos_with_owner(db).await?;
//!     let renter = factory::user::create_renter(db).await?;
//!     let _booking = factory::booking::create_booking(db, renter.id, kos.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
