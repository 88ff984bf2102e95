//! Clients for the external HTTP services the API depends on.
//!
//! Both clients borrow the shared `reqwest::Client` from `AppState` and never retry.

pub mod cdn;
pub mod geocoding;
