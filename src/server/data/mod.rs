//! Database repository layer for all domain entities.
//!
//! Repositories hold a borrowed connection and return domain models. They are
//! generic over `ConnectionTrait` so services can run several repositories inside
//! one transaction by passing `&DatabaseTransaction` instead of the pool.

pub mod booking;
pub mod favorite;
pub mod kos;
pub mod photo;
pub mod review;
pub mod stats;
pub mod user;

#[cfg(test)]
mod test;
