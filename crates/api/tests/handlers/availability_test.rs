use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

use crate::test_utils::{as_user, booking_body, slots_of, TestContext};

#[tokio::test]
async fn test_list_slots() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/slots").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(slots_of(&response.json::<Value>()), vec!["09:00", "10:00", "11:00"]);
}

#[tokio::test]
async fn test_availability_of_empty_date_is_full_catalog() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/availability/2025-03-01").await;
    let body = response.json::<Value>();

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(body["date"], "2025-03-01");
    assert_eq!(slots_of(&body), vec!["09:00", "10:00", "11:00"]);
    assert_eq!(body["fully_booked"], false);
    assert!(body["message"].is_null());
}

#[tokio::test]
async fn test_availability_excludes_booked_slot() {
    let ctx = TestContext::new();
    as_user(ctx.server.post("/api/bookings"), "user-a")
        .json(&booking_body("2025-03-01", "10:00", "consult"))
        .await;

    let body = ctx.server.get("/api/availability/2025-03-01").await.json::<Value>();

    assert_eq!(slots_of(&body), vec!["09:00", "11:00"]);
}

#[tokio::test]
async fn test_fully_booked_date_reports_no_availability() {
    let ctx = TestContext::new();
    for slot in ["09:00", "10:00", "11:00"] {
        let response = as_user(ctx.server.post("/api/bookings"), "user-a")
            .json(&booking_body("2025-03-01", slot, "consult"))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let body = ctx.server.get("/api/availability/2025-03-01").await.json::<Value>();

    assert!(slots_of(&body).is_empty());
    assert_eq!(body["fully_booked"], true);
    assert_eq!(body["message"], "No times available on 2025-03-01");
}

#[rstest]
#[case("2025-02-19")]
#[case("2025-13-01")]
#[case("not-a-date")]
#[tokio::test]
async fn test_availability_rejects_bad_dates(#[case] date: &str) {
    let ctx = TestContext::new();

    let response = ctx.server.get(&format!("/api/availability/{}", date)).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "invalid_date");
}

#[tokio::test]
async fn test_availability_for_today() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/availability/2025-02-20").await;

    assert_eq!(response.status_code(), StatusCode::OK);
}
