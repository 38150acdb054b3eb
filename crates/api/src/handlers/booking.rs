use agenda_core::models::booking::{Booking, BookingListResponse, BookingRequest};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{
    middleware::{
        auth::CurrentRequester,
        error_handling::{AppError, AppJson},
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    CurrentRequester(requester): CurrentRequester,
    AppJson(payload): AppJson<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = state
        .bookings
        .create_booking(&payload, requester.as_ref())
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

#[axum::debug_handler]
pub async fn list_my_bookings(
    State(state): State<Arc<ApiState>>,
    CurrentRequester(requester): CurrentRequester,
) -> Result<Json<BookingListResponse>, AppError> {
    let bookings = state.bookings.bookings_for(requester.as_ref()).await?;
    Ok(Json(BookingListResponse { bookings }))
}
