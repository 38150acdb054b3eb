use std::sync::Arc;

use agenda_api::middleware::error_handling::AppError;
use agenda_core::{errors::AgendaError, memory::StaticRoleDirectory, models::slot::Slot};
use agenda_db::mock::repositories::{MockBookingRepo, MockRoleRepo};
use axum::{http::StatusCode, response::IntoResponse};
use axum_test::TestServer;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use uuid::Uuid;

use crate::test_utils::{as_user, booking_body, build_state, ADMIN_ID};

#[rstest]
#[case(AgendaError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST)]
#[case(AgendaError::InvalidDate("x".into()), StatusCode::BAD_REQUEST)]
#[case(AgendaError::InvalidSlot("x".into()), StatusCode::BAD_REQUEST)]
#[case(AgendaError::MissingNote, StatusCode::BAD_REQUEST)]
#[case(AgendaError::NotAuthenticated, StatusCode::UNAUTHORIZED)]
#[case(AgendaError::Unauthorized("x".into()), StatusCode::FORBIDDEN)]
#[case(AgendaError::NotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case(
    AgendaError::SlotAlreadyBooked {
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        slot: Slot::from_hm(10, 0).unwrap(),
    },
    StatusCode::CONFLICT
)]
#[case(AgendaError::StoreUnavailable(eyre::eyre!("down")), StatusCode::SERVICE_UNAVAILABLE)]
fn test_error_status_mapping(#[case] error: AgendaError, #[case] status: StatusCode) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), status);
}

#[test]
fn test_eyre_report_maps_to_unavailable() {
    let error: AppError = eyre::eyre!("pool exhausted").into();

    assert_eq!(error.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_store_outage_surfaces_as_service_unavailable() {
    let mut repo = MockBookingRepo::new();
    repo.expect_list_by_date()
        .returning(|_| Err(AgendaError::StoreUnavailable(eyre::eyre!("connection refused"))));
    repo.expect_insert()
        .returning(|_| Err(AgendaError::StoreUnavailable(eyre::eyre!("connection refused"))));

    let state = build_state(Arc::new(repo), Arc::new(StaticRoleDirectory::default()));
    let server = TestServer::new(agenda_api::app(state)).unwrap();

    let availability = server.get("/api/availability/2025-03-01").await;
    let booking = as_user(server.post("/api/bookings"), "user-a")
        .json(&booking_body("2025-03-01", "09:00", "consult"))
        .await;

    assert_eq!(availability.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(booking.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(booking.json::<Value>()["code"], "store_unavailable");
}

#[tokio::test]
async fn test_role_lookup_failure_blocks_staff_routes() {
    let mut roles = MockRoleRepo::new();
    roles
        .expect_is_admin()
        .returning(|_| Err(AgendaError::StoreUnavailable(eyre::eyre!("timeout"))));
    let mut repo = MockBookingRepo::new();
    repo.expect_delete_by_id().times(0);

    let state = build_state(Arc::new(repo), Arc::new(roles));
    let server = TestServer::new(agenda_api::app(state)).unwrap();

    let response = as_user(
        server.delete(&format!("/api/admin/bookings/{}", Uuid::new_v4())),
        ADMIN_ID,
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_reports_store() {
    let state = build_state(
        Arc::new(MockBookingRepo::new()),
        Arc::new(StaticRoleDirectory::default()),
    );
    let server = TestServer::new(agenda_api::app(state)).unwrap();

    let body = server.get("/health").await.json::<Value>();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["slots_per_day"], 3);
}
