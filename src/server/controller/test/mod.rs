//! HTTP-level tests driving the full router through `axum_test::TestServer`.

use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use crate::server::{
    auth::jwt::{create_session_token, TokenSettings},
    config::GeocodeConfig,
    model::user::User,
    router::router,
    state::AppState,
};

mod auth;
mod booking;

fn tokens() -> TokenSettings {
    TokenSettings::new("controller-test-secret", 1)
}

/// Serves the API over `db` with no CDN configured.
fn server(db: &DatabaseConnection, geocode: GeocodeConfig) -> TestServer {
    let state = AppState::new(
        db.clone(),
        reqwest::Client::new(),
        tokens(),
        None,
        geocode,
    );

    TestServer::new(router().with_state(state)).unwrap()
}

/// Bearer token for an existing user row.
fn token_for(user: entity::user::Model) -> String {
    let user = User::from_entity(user).unwrap();
    let (token, _) = create_session_token(&user, &tokens()).unwrap();
    token
}
