//! Staff handlers. The administrator claim is resolved by [`StaffActor`];
//! the scheduling core refuses callers without it.

use agenda_core::models::booking::BookingListResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::StaffActor, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    StaffActor(actor): StaffActor,
) -> Result<Json<BookingListResponse>, AppError> {
    let bookings = state.revocation.list_bookings(&actor).await?;
    Ok(Json(BookingListResponse { bookings }))
}

/// Deletes a booking and frees its slot.
///
/// Answers `204` once, and `404` for an id that is already gone.
#[axum::debug_handler]
pub async fn revoke_booking(
    State(state): State<Arc<ApiState>>,
    StaffActor(actor): StaffActor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.revocation.revoke(id, &actor).await?;
    Ok(StatusCode::NO_CONTENT)
}
