use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::{as_user, booking_body, slots_of, TestContext, ADMIN_ID};

async fn book(ctx: &TestContext, user: &str, date: &str, slot: &str) -> String {
    let body = as_user(ctx.server.post("/api/bookings"), user)
        .json(&booking_body(date, slot, "consult"))
        .await
        .json::<Value>();
    body["id"].as_str().expect("booking id").to_string()
}

#[test_log::test(tokio::test)]
async fn test_revoke_frees_slot() {
    let ctx = TestContext::new();
    let id = book(&ctx, "user-a", "2025-03-01", "10:00").await;

    let response = as_user(ctx.server.delete(&format!("/api/admin/bookings/{}", id)), ADMIN_ID).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let body = ctx.server.get("/api/availability/2025-03-01").await.json::<Value>();
    assert_eq!(slots_of(&body), vec!["09:00", "10:00", "11:00"]);

    let rebooked = as_user(ctx.server.post("/api/bookings"), "user-b")
        .json(&booking_body("2025-03-01", "10:00", "consult"))
        .await;
    assert_eq!(rebooked.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_revoke_twice_reports_not_found() {
    let ctx = TestContext::new();
    let id = book(&ctx, "user-a", "2025-03-01", "11:00").await;
    let path = format!("/api/admin/bookings/{}", id);

    let first = as_user(ctx.server.delete(&path), ADMIN_ID).await;
    let second = as_user(ctx.server.delete(&path), ADMIN_ID).await;

    assert_eq!(first.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(second.json::<Value>()["code"], "not_found");
}

#[tokio::test]
async fn test_revoke_requires_admin() {
    let ctx = TestContext::new();
    let id = book(&ctx, "user-a", "2025-03-01", "09:00").await;
    let path = format!("/api/admin/bookings/{}", id);

    let member = as_user(ctx.server.delete(&path), "user-a").await;
    let anonymous = ctx.server.delete(&path).await;

    assert_eq!(member.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(member.json::<Value>()["code"], "unauthorized");
    assert_eq!(anonymous.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn test_staff_listing() {
    let ctx = TestContext::new();
    book(&ctx, "user-a", "2025-03-01", "10:00").await;
    book(&ctx, "user-b", "2025-03-04", "09:00").await;

    let response = as_user(ctx.server.get("/api/admin/bookings"), ADMIN_ID).await;
    let body = response.json::<Value>();
    let dates: Vec<&str> = body["bookings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["date"].as_str().unwrap())
        .collect();

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(dates, vec!["2025-03-04", "2025-03-01"]);

    let member = as_user(ctx.server.get("/api/admin/bookings"), "user-a").await;
    assert_eq!(member.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_revoke_with_malformed_id() {
    let ctx = TestContext::new();

    let response = as_user(ctx.server.delete("/api/admin/bookings/not-a-uuid"), ADMIN_ID).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
