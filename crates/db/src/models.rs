use agenda_core::models::booking::{Booking, BookingStatus};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{eyre, Report};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub booking_date: NaiveDate,
    pub slot: NaiveTime,
    pub requester_id: String,
    pub requester_display_name: String,
    pub requester_contact: String,
    pub note: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbBooking> for Booking {
    type Error = Report;

    fn try_from(row: DbBooking) -> Result<Self, Self::Error> {
        let status: BookingStatus = row
            .status
            .parse()
            .map_err(|e: String| eyre!("booking {}: {}", row.id, e))?;

        Ok(Booking {
            id: row.id,
            date: row.booking_date,
            slot: row.slot.into(),
            requester_id: row.requester_id,
            requester_display_name: row.requester_display_name,
            requester_contact: row.requester_contact,
            note: row.note,
            status,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
