//! Request guards shared by the controllers.
//!
//! - `auth` - Token authentication and role checks
//! - `session` - Reading and writing the session token cookie
//! - `rate_limit` - Per-client fixed-window limiter for the geocoding proxy

pub mod auth;
pub mod rate_limit;
pub mod session;

#[cfg(test)]
mod test;
