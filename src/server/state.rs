//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! axum's state extraction. Every field is cheap to clone: the database pool and
//! the HTTP client are reference counted internally and the rate limiter wraps an
//! `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::{
    auth::jwt::TokenSettings,
    config::{CdnConfig, GeocodeConfig},
    middleware::rate_limit::RateLimiter,
};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for the CDN and geocoding APIs.
    ///
    /// Configured without redirects and with a request timeout.
    pub http_client: reqwest::Client,

    /// Secret and lifetime used to sign and verify session tokens.
    pub tokens: TokenSettings,

    /// Image CDN credentials; uploads answer 503 while this is `None`.
    pub cdn: Option<CdnConfig>,

    pub geocode: GeocodeConfig,

    /// Per-client limiter guarding the geocoding proxy.
    pub geocode_limiter: RateLimiter,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        tokens: TokenSettings,
        cdn: Option<CdnConfig>,
        geocode: GeocodeConfig,
    ) -> Self {
        let geocode_limiter = RateLimiter::new(
            geocode.rate_limit,
            std::time::Duration::from_secs(geocode.rate_window_secs),
        );

        Self {
            db,
            http_client,
            tokens,
            cdn,
            geocode,
            geocode_limiter,
        }
    }
}
