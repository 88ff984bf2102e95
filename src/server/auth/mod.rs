//! Token issuance and password hashing.
//!
//! Request-time authentication lives in `middleware::auth`; this module only
//! holds the primitives it and the auth service share.

pub mod jwt;
pub mod password;
