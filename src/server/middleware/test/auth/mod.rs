use axum::http::{HeaderMap, HeaderValue};

use crate::server::{
    auth::jwt::{create_session_token, TokenSettings},
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
};
use entity::prelude::User as UserEntity;
use test_utils::{builder::TestBuilder, factory};

mod optional;
mod require;

fn settings() -> TokenSettings {
    TokenSettings::new("guard-test-secret", 1)
}

/// Headers carrying a bearer token issued for `user`.
fn bearer_for(user: entity::user::Model, settings: &TokenSettings) -> HeaderMap {
    let user = User::from_entity(user).unwrap();
    let (token, _) = create_session_token(&user, settings).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        "authorization",
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
