use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::slot::Slot;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("A note describing the reason for the appointment is required")]
    MissingNote,

    #[error("Authentication required to book an appointment")]
    NotAuthenticated,

    #[error("Slot {slot} on {date} is already booked, refresh availability and pick another time")]
    SlotAlreadyBooked { date: NaiveDate, slot: Slot },

    #[error("Booking not found: {0}")]
    NotFound(Uuid),

    #[error("Administrator capability required: {0}")]
    Unauthorized(String),

    #[error("Booking store unavailable: {0}")]
    StoreUnavailable(#[from] eyre::Report),
}

impl AgendaError {
    /// Stable machine-readable identifier for the failure, independent of the
    /// human message.
    pub fn code(&self) -> &'static str {
        match self {
            AgendaError::InvalidRequest(_) => "invalid_request",
            AgendaError::InvalidDate(_) => "invalid_date",
            AgendaError::InvalidSlot(_) => "invalid_slot",
            AgendaError::MissingNote => "missing_note",
            AgendaError::NotAuthenticated => "not_authenticated",
            AgendaError::SlotAlreadyBooked { .. } => "slot_already_booked",
            AgendaError::NotFound(_) => "not_found",
            AgendaError::Unauthorized(_) => "unauthorized",
            AgendaError::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

pub type AgendaResult<T> = Result<T, AgendaError>;
