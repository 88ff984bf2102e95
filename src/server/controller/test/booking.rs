use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory, factory::booking::BookingFactory};

use super::{server, token_for};
use crate::server::config::GeocodeConfig;

fn booking_request(kos_id: i32, days_ahead: i64, months: u32) -> Value {
    let check_in = Utc::now().date_naive() + Duration::days(days_ahead);
    json!({
        "kos_id": kos_id,
        "check_in_date": check_in.format("%Y-%m-%d").to_string(),
        "duration_months": months,
    })
}

/// Tests booking creation through the API.
///
/// Expected: 201 with a pending, priced booking; 409 for an overlapping request
#[tokio::test]
async fn creates_booking_then_rejects_overlap() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());
    let (_seller, _post, kos) = factory::create_kos_with_owner(db).await.unwrap();
    let renter = factory::create_renter(db).await.unwrap();
    let other_renter = factory::create_renter(db).await.unwrap();

    let created = server
        .post("/api/bookings")
        .authorization_bearer(token_for(renter))
        .json(&booking_request(kos.id, 10, 3))
        .await;
    created.assert_status(StatusCode::CREATED);
    let body: Value = created.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["total_price"], 3_000_000);

    let overlapping = server
        .post("/api/bookings")
        .authorization_bearer(token_for(other_renter))
        .json(&booking_request(kos.id, 40, 1))
        .await;
    overlapping.assert_status(StatusCode::CONFLICT);
    let body: Value = overlapping.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "conflict");
}

/// Tests a seller booking their own listing.
///
/// Expected: 403 `forbidden`
#[tokio::test]
async fn owner_cannot_book_own_kos() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());
    let (seller, _post, kos) = factory::create_kos_with_owner(db).await.unwrap();

    let response = server
        .post("/api/bookings")
        .authorization_bearer(token_for(seller))
        .json(&booking_request(kos.id, 10, 1))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"], "forbidden");
}

/// Tests status changes by each kind of caller.
///
/// Expected: renter confirm is 400 `invalid_transition`, an unrelated user is
/// 403 `forbidden`, the kos owner confirms with 200
#[tokio::test]
async fn status_change_follows_caller_role() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());
    let (seller, _post, kos) = factory::create_kos_with_owner(db).await.unwrap();
    let renter = factory::create_renter(db).await.unwrap();
    let stranger = factory::create_renter(db).await.unwrap();
    let booking = factory::create_booking(db, renter.id, kos.id).await.unwrap();
    let path = format!("/api/bookings/{}/status", booking.id);
    let confirm = json!({ "status": "confirmed" });

    let by_renter = server
        .patch(&path)
        .authorization_bearer(token_for(renter))
        .json(&confirm)
        .await;
    by_renter.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = by_renter.json();
    assert_eq!(body["error"], "invalid_transition");

    let by_stranger = server
        .patch(&path)
        .authorization_bearer(token_for(stranger))
        .json(&confirm)
        .await;
    by_stranger.assert_status(StatusCode::FORBIDDEN);
    let body: Value = by_stranger.json();
    assert_eq!(body["error"], "forbidden");

    let by_owner = server
        .patch(&path)
        .authorization_bearer(token_for(seller))
        .json(&confirm)
        .await;
    by_owner.assert_status_ok();
    let body: Value = by_owner.json();
    assert_eq!(body["data"]["status"], "confirmed");
}

/// Tests confirming a pending booking that overlaps a confirmed one.
///
/// Expected: 409 `conflict`, the pending booking stays pending
#[tokio::test]
async fn confirm_rejects_overlap_with_confirmed_booking() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());
    let (seller, _post, kos) = factory::create_kos_with_owner(db).await.unwrap();
    let renter = factory::create_renter(db).await.unwrap();
    let other_renter = factory::create_renter(db).await.unwrap();
    let check_in = Utc::now().date_naive() + Duration::days(30);

    BookingFactory::new(db, renter.id, kos.id)
        .check_in(check_in)
        .months(2)
        .status("confirmed")
        .build()
        .await
        .unwrap();
    let pending = BookingFactory::new(db, other_renter.id, kos.id)
        .check_in(check_in + Duration::days(15))
        .build()
        .await
        .unwrap();

    let response = server
        .patch(&format!("/api/bookings/{}/status", pending.id))
        .authorization_bearer(token_for(seller))
        .json(&json!({ "status": "confirmed" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "conflict");

    let fetched = server
        .get(&format!("/api/bookings/{}", pending.id))
        .authorization_bearer(token_for(other_renter))
        .await;
    fetched.assert_status_ok();
    let body: Value = fetched.json();
    assert_eq!(body["data"]["status"], "pending");
}

/// Tests reviewing the same kos twice.
///
/// Expected: 201 then 409 `conflict`
#[tokio::test]
async fn second_review_is_a_conflict() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());
    let (_seller, _post, kos) = factory::create_kos_with_owner(db).await.unwrap();
    let renter = factory::create_renter(db).await.unwrap();
    let token = token_for(renter);
    let path = format!("/api/kos/{}/reviews", kos.id);
    let review = json!({ "rating": 4, "comment": "Bersih dan dekat kampus" });

    let first = server
        .post(&path)
        .authorization_bearer(token.clone())
        .json(&review)
        .await;
    first.assert_status(StatusCode::CREATED);
    let body: Value = first.json();
    assert_eq!(body["data"]["rating"], 4);

    let second = server
        .post(&path)
        .authorization_bearer(token)
        .json(&review)
        .await;
    second.assert_status(StatusCode::CONFLICT);
    let body: Value = second.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "conflict");
}

/// Tests the favorite add, duplicate and remove cycle.
///
/// Expected: 201, 409 `conflict`, then 200 and an empty favorites list
#[tokio::test]
async fn favorite_round_trip() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = server(db, GeocodeConfig::default());
    let (_seller, _post, kos) = factory::create_kos_with_owner(db).await.unwrap();
    let renter = factory::create_renter(db).await.unwrap();
    let token = token_for(renter);
    let favorite = json!({ "kos_id": kos.id });

    server
        .post("/api/favorites")
        .authorization_bearer(token.clone())
        .json(&favorite)
        .await
        .assert_status(StatusCode::CREATED);

    let duplicate = server
        .post("/api/favorites")
        .authorization_bearer(token.clone())
        .json(&favorite)
        .await;
    duplicate.assert_status(StatusCode::CONFLICT);
    let body: Value = duplicate.json();
    assert_eq!(body["error"], "conflict");

    server
        .delete(&format!("/api/favorites/{}", kos.id))
        .authorization_bearer(token.clone())
        .await
        .assert_status_ok();

    let listed = server
        .get("/api/favorites")
        .authorization_bearer(token)
        .await;
    listed.assert_status_ok();
    let body: Value = listed.json();
    assert_eq!(body["data"]["total"], 0);
}
