//! Integration tests for the booking endpoint: the capacity-one end-to-end
//! scenario, validation failures, promo handling, and idempotent retries.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;

use daytrip_db::models::experience::CreateExperience;
use daytrip_db::models::slot::CreateSlot;
use daytrip_db::repositories::{BookingRepo, ExperienceRepo, SlotRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_slot(pool: &PgPool, price_cents: i64, capacity: i32) -> i64 {
    let experience = ExperienceRepo::create(
        pool,
        &CreateExperience {
            name: "Kayaking".to_string(),
            description: "Curated small-group experience.".to_string(),
            location: "Kabini".to_string(),
            price_cents,
            image_url: "/kayak.jpg".to_string(),
            rating: None,
        },
    )
    .await
    .unwrap();

    let slot = SlotRepo::create(
        pool,
        &CreateSlot {
            experience_id: experience.id,
            slot_date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            start_time: "07:00 AM".to_string(),
            end_time: "09:00 AM".to_string(),
            capacity,
            booked_count: None,
        },
    )
    .await
    .unwrap();
    slot.id
}

fn booking_body(slot_id: i64, name: &str, email: &str) -> serde_json::Value {
    json!({ "slotId": slot_id, "userName": name, "userEmail": email })
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn booking_succeeds_and_increments_the_slot(pool: PgPool) {
    let slot_id = seed_slot(&pool, 99_900, 10).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json(&app, "/bookings", booking_body(slot_id, "Alice", "a@x.com")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Booking confirmed!");
    assert_eq!(json["booking"]["slot_id"], slot_id);
    assert_eq!(json["booking"]["user_name"], "Alice");
    assert_eq!(json["booking"]["final_price_cents"], 99_900);

    let slot = SlotRepo::find_by_id(&pool, slot_id).await.unwrap().unwrap();
    assert_eq!(slot.booked_count, 1);
}

// ---------------------------------------------------------------------------
// Capacity-one end-to-end scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_booking_on_full_slot_is_rejected(pool: PgPool) {
    let slot_id = seed_slot(&pool, 99_900, 1).await;
    let app = common::build_test_app(pool.clone());

    let first = post_json(&app, "/bookings", booking_body(slot_id, "Alice", "a@x.com")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(&app, "/bookings", booking_body(slot_id, "Bob", "b@x.com")).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let json = body_json(second).await;
    assert_eq!(json["code"], "SLOT_UNAVAILABLE");

    // Bob's rejection left no trace: count unchanged, one booking row.
    let slot = SlotRepo::find_by_id(&pool, slot_id).await.unwrap().unwrap();
    assert_eq!(slot.booked_count, 1);
    assert_eq!(BookingRepo::count_for_slot(&pool, slot_id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_slot_gets_the_same_rejection_as_a_full_one(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(&app, "/bookings", booking_body(4242, "Alice", "a@x.com")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "SLOT_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_fields_return_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(&app, "/bookings", json!({ "userName": "Alice" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_email_returns_400(pool: PgPool) {
    let slot_id = seed_slot(&pool, 99_900, 10).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        &app,
        "/bookings",
        booking_body(slot_id, "Alice", "not-an-email"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Validation failures happen before any slot mutation.
    let slot = SlotRepo::find_by_id(&pool, slot_id).await.unwrap().unwrap();
    assert_eq!(slot.booked_count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_user_name_returns_400(pool: PgPool) {
    let slot_id = seed_slot(&pool, 99_900, 10).await;
    let app = common::build_test_app(pool);

    let response = post_json(&app, "/bookings", booking_body(slot_id, "   ", "a@x.com")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Promo handling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn promo_discount_is_applied_server_side(pool: PgPool) {
    let slot_id = seed_slot(&pool, 99_900, 10).await;
    let app = common::build_test_app(pool);

    let mut body = booking_body(slot_id, "Alice", "a@x.com");
    body["promoCode"] = json!("save10");

    let response = post_json(&app, "/bookings", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    // Code is normalized and the discount recomputed from the stored price.
    assert_eq!(json["booking"]["promo_code"], "SAVE10");
    assert_eq!(json["booking"]["final_price_cents"], 98_900);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_discount_clamps_the_total_at_zero(pool: PgPool) {
    // 5 000-cent experience against the 10 000-cent FLAT100 discount.
    let slot_id = seed_slot(&pool, 5_000, 10).await;
    let app = common::build_test_app(pool);

    let mut body = booking_body(slot_id, "Alice", "a@x.com");
    body["promoCode"] = json!("FLAT100");

    let response = post_json(&app, "/bookings", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["booking"]["final_price_cents"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bogus_promo_code_rejects_the_booking(pool: PgPool) {
    let slot_id = seed_slot(&pool, 99_900, 10).await;
    let app = common::build_test_app(pool.clone());

    let mut body = booking_body(slot_id, "Alice", "a@x.com");
    body["promoCode"] = json!("BOGUS");

    let response = post_json(&app, "/bookings", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // No booking was created and no capacity consumed.
    let slot = SlotRepo::find_by_id(&pool, slot_id).await.unwrap().unwrap();
    assert_eq!(slot.booked_count, 0);
    assert_eq!(BookingRepo::count_for_slot(&pool, slot_id).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Idempotency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn retried_booking_with_same_key_is_not_duplicated(pool: PgPool) {
    let slot_id = seed_slot(&pool, 99_900, 10).await;
    let app = common::build_test_app(pool.clone());

    let mut body = booking_body(slot_id, "Alice", "a@x.com");
    body["idempotencyKey"] = json!("retry-token-1");

    let first = post_json(&app, "/bookings", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_json = body_json(first).await;

    let second = post_json(&app, "/bookings", body).await;
    assert_eq!(second.status(), StatusCode::CREATED);
    let second_json = body_json(second).await;

    assert_eq!(first_json["booking"]["id"], second_json["booking"]["id"]);

    let slot = SlotRepo::find_by_id(&pool, slot_id).await.unwrap().unwrap();
    assert_eq!(slot.booked_count, 1);
    assert_eq!(BookingRepo::count_for_slot(&pool, slot_id).await.unwrap(), 1);
}
