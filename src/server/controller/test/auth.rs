use axum::http::StatusCode;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use super::{server, token_for};
use crate::server::{config::GeocodeConfig, middleware::session::TOKEN_COOKIE};

/// Tests registering then logging in over HTTP.
///
/// Expected: both answer with a token and set the session cookie; the cookie
/// alone authenticates `/api/auth/me`
#[tokio::test]
async fn register_login_and_cookie_session() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());

    let registered = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Siti Rahma",
            "username": "siti",
            "password": "rahasia123",
        }))
        .await;
    registered.assert_status(StatusCode::CREATED);
    let body: Value = registered.json();
    assert_eq!(body["data"]["user"]["role"], "RENTER");
    assert!(registered
        .header("set-cookie")
        .to_str()
        .unwrap()
        .starts_with(TOKEN_COOKIE));

    let login = server
        .post("/api/auth/login")
        .json(&json!({ "username": "siti", "password": "rahasia123" }))
        .await;
    login.assert_status_ok();
    let body: Value = login.json();
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let me = server
        .get("/api/auth/me")
        .add_header("cookie", format!("{}={}", TOKEN_COOKIE, token))
        .await;
    me.assert_status_ok();
    let body: Value = me.json();
    assert_eq!(body["data"]["username"], "siti");
}

/// Tests the validation envelope on a bad registration.
///
/// Expected: 400 `validation_error` with per-field details
#[tokio::test]
async fn register_reports_field_errors() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Siti",
            "username": "s",
            "password": "short",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"]["username"].is_array());
    assert!(body["details"]["password"].is_array());
}

/// Tests a malformed JSON body.
///
/// Expected: 400 `validation_error` rather than axum's plain-text rejection
#[tokio::test]
async fn malformed_body_uses_error_envelope() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "siti" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "validation_error");
}

/// Tests authenticated endpoints without credentials.
///
/// Expected: 401 `unauthorized`
#[tokio::test]
async fn me_requires_session() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());

    let response = server.get("/api/auth/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "unauthorized");
}

/// Tests admin-only statistics.
///
/// Expected: 403 for a renter, 200 for an admin
#[tokio::test]
async fn stats_require_admin() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());
    let renter = factory::user::create_renter(db).await.unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    let response = server
        .get("/api/admin/stats")
        .authorization_bearer(token_for(renter))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = server
        .get("/api/admin/stats")
        .authorization_bearer(token_for(admin))
        .await;
    response.assert_status_ok();
}

/// Tests logout.
///
/// Expected: 200 and a cookie that expires immediately
#[tokio::test]
async fn logout_clears_cookie() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());

    let response = server.post("/api/auth/logout").await;

    response.assert_status_ok();
    let cookie = response.header("set-cookie");
    assert!(cookie.to_str().unwrap().contains("Max-Age=0"));
}
