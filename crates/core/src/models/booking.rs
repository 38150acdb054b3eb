use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AgendaError, AgendaResult};
use crate::models::{identity::Requester, slot::Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(BookingStatus::Scheduled),
            other => Err(format!("unknown booking status '{}'", other)),
        }
    }
}

/// A persisted reservation of one slot on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub date: NaiveDate,
    pub slot: Slot,
    pub requester_id: String,
    pub requester_display_name: String,
    pub requester_contact: String,
    pub note: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// A validated booking that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub date: NaiveDate,
    pub slot: Slot,
    pub requester: Requester,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl NewBooking {
    pub fn into_booking(self, id: Uuid) -> Booking {
        Booking {
            id,
            date: self.date,
            slot: self.slot,
            requester_id: self.requester.id,
            requester_display_name: self.requester.display_name,
            requester_contact: self.requester.contact,
            note: self.note,
            status: BookingStatus::Scheduled,
            created_at: self.created_at,
        }
    }
}

/// Raw booking input as submitted by the requester.
///
/// Absent fields deserialize as empty and are rejected by the booking
/// service with the matching error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default, alias = "time")]
    pub slot: String,
    #[serde(default)]
    pub note: String,
}

/// Free slots of a date, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

impl Availability {
    /// True when every catalog slot of the date is taken.
    pub fn is_fully_booked(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
    pub fully_booked: bool,
    pub message: Option<String>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        let fully_booked = availability.is_fully_booked();
        let message = fully_booked
            .then(|| format!("No times available on {}", availability.date));
        Self {
            date: availability.date,
            slots: availability.slots,
            fully_booked,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCatalogResponse {
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
}

/// Parses an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> AgendaResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AgendaError::InvalidDate(format!("'{}' is not a date in YYYY-MM-DD format", raw)))
}
