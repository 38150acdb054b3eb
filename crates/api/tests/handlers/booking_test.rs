use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{as_named_user, as_user, booking_body, TestContext};

#[test_log::test(tokio::test)]
async fn test_create_booking() {
    let ctx = TestContext::new();

    let response = as_named_user(ctx.server.post("/api/bookings"), "user-a", "Ana")
        .json(&booking_body("2025-03-01", "10:00", " consult "))
        .await;
    let body = response.json::<Value>();

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(body["date"], "2025-03-01");
    assert_eq!(body["slot"], "10:00");
    assert_eq!(body["note"], "consult");
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["requester_id"], "user-a");
    assert_eq!(body["requester_display_name"], "Ana");
    assert_eq!(body["requester_contact"], "user-a@example.com");
    assert!(body["id"].as_str().is_some());
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn test_display_name_defaults_to_contact() {
    let ctx = TestContext::new();

    let body = as_user(ctx.server.post("/api/bookings"), "user-b")
        .json(&json!({ "date": "2025-03-01", "time": "09:00", "note": "prayer" }))
        .await
        .json::<Value>();

    assert_eq!(body["requester_display_name"], "user-b@example.com");
}

#[test_log::test(tokio::test)]
async fn test_second_booking_of_slot_conflicts() {
    let ctx = TestContext::new();
    as_user(ctx.server.post("/api/bookings"), "user-a")
        .json(&booking_body("2025-03-01", "10:00", "consult"))
        .await;

    let response = as_user(ctx.server.post("/api/bookings"), "user-b")
        .json(&booking_body("2025-03-01", "10:00", "consult"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["code"], "slot_already_booked");
    assert_eq!(ctx.store.len(), 1);
}

#[rstest]
#[case(booking_body("2025-02-19", "10:00", "consult"), true, StatusCode::BAD_REQUEST, "invalid_date")]
#[case(booking_body("2025-03-01", "12:00", "consult"), true, StatusCode::BAD_REQUEST, "invalid_slot")]
#[case(booking_body("2025-03-01", "10:00", "  "), true, StatusCode::BAD_REQUEST, "missing_note")]
#[case(json!({ "date": "2025-03-01", "slot": "10:00" }), true, StatusCode::BAD_REQUEST, "missing_note")]
#[case(json!({ "slot": "09:00", "note": "consult" }), true, StatusCode::BAD_REQUEST, "invalid_date")]
#[case(json!({ "date": "2025-03-01", "note": "consult" }), true, StatusCode::BAD_REQUEST, "invalid_slot")]
#[case(json!({ "date": 20250301, "slot": "09:00", "note": "consult" }), true, StatusCode::BAD_REQUEST, "invalid_request")]
#[case(booking_body("2025-03-01", "10:00", "consult"), false, StatusCode::UNAUTHORIZED, "not_authenticated")]
#[tokio::test]
async fn test_create_booking_failures(
    #[case] body: Value,
    #[case] authenticated: bool,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let ctx = TestContext::new();
    let request = ctx.server.post("/api/bookings").json(&body);
    let request = if authenticated {
        as_user(request, "user-a")
    } else {
        request
    };

    let response = request.await;

    assert_eq!(response.status_code(), status);
    assert_eq!(response.json::<Value>()["code"], code);
    assert!(ctx.store.is_empty());
}

#[rstest]
#[case("{not json", "application/json")]
#[case(r#"{"date":"2025-03-01","slot":"09:00","note":"consult"}"#, "text/plain")]
#[tokio::test]
async fn test_unreadable_body_is_invalid_request(#[case] body: &'static str, #[case] content_type: &str) {
    let ctx = TestContext::new();

    let response = as_user(ctx.server.post("/api/bookings"), "user-a")
        .content_type(content_type)
        .bytes(body.into())
        .await;
    let body = response.json::<Value>();

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request: "));
    assert!(ctx.store.is_empty());
}

#[tokio::test]
async fn test_list_my_bookings() {
    let ctx = TestContext::new();
    for (user, date, slot) in [
        ("user-a", "2025-03-02", "09:00"),
        ("user-b", "2025-03-01", "09:00"),
        ("user-a", "2025-03-01", "11:00"),
    ] {
        as_user(ctx.server.post("/api/bookings"), user)
            .json(&booking_body(date, slot, "consult"))
            .await;
    }

    let body = as_user(ctx.server.get("/api/bookings/mine"), "user-a")
        .await
        .json::<Value>();
    let mine: Vec<(String, String)> = body["bookings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| {
            (
                b["date"].as_str().unwrap().to_string(),
                b["slot"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        mine,
        vec![
            ("2025-03-01".to_string(), "11:00".to_string()),
            ("2025-03-02".to_string(), "09:00".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_list_my_bookings_requires_identity() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/bookings/mine").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_my_bookings_carry_display_name() {
    use fake::{faker::name::en::FirstName, Fake};

    let ctx = TestContext::new();
    let name: String = FirstName().fake();
    as_named_user(ctx.server.post("/api/bookings"), "user-f", &name)
        .json(&booking_body("2025-03-02", "11:00", "visit"))
        .await;

    let body = as_user(ctx.server.get("/api/bookings/mine"), "user-f")
        .await
        .json::<Value>();

    assert_eq!(body["bookings"][0]["requester_display_name"], name.as_str());
}
