//! # Availability Handlers
//!
//! Handlers for the daily slot catalog and the free slots of a date.

use agenda_core::{
    errors::AgendaError,
    models::booking::{parse_date, AvailabilityResponse, SlotCatalogResponse},
};
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists every time offered each day, in order.
///
/// ```text
/// GET /api/slots
/// ```
#[axum::debug_handler]
pub async fn list_slots(State(state): State<Arc<ApiState>>) -> Json<SlotCatalogResponse> {
    Json(SlotCatalogResponse {
        slots: state.catalog.list_slots().to_vec(),
    })
}

/// Free slots of a date.
///
/// ```text
/// GET /api/availability/2025-03-01
/// ```
///
/// Dates before today are rejected with `invalid_date`; a fully booked date
/// answers with an empty list, `fully_booked: true` and a message to show.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let date = parse_date(&date)?;
    let today = state.clock.today();
    if date < today {
        return Err(AppError(AgendaError::InvalidDate(format!(
            "{} is in the past, bookings start from {}",
            date, today
        ))));
    }

    let availability = state.resolver.available_slots(date).await?;
    Ok(Json(availability.into()))
}
