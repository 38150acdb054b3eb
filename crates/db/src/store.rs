//! PostgreSQL-backed implementations of the scheduling collaborators.

use agenda_core::{
    errors::{AgendaError, AgendaResult},
    models::booking::{Booking, NewBooking},
    store::{BookingStore, RoleDirectory},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::WrapErr;
use uuid::Uuid;

use crate::{
    models::DbBooking,
    repositories::{booking, user},
    DbPool,
};

pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_bookings(rows: Vec<DbBooking>) -> AgendaResult<Vec<Booking>> {
    rows.into_iter()
        .map(|row| Booking::try_from(row).map_err(AgendaError::StoreUnavailable))
        .collect()
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn list_by_date(&self, date: NaiveDate) -> AgendaResult<Vec<Booking>> {
        let rows = booking::get_bookings_by_date(&self.pool, date)
            .await
            .wrap_err_with(|| format!("failed to load bookings for {}", date))?;
        into_bookings(rows)
    }

    async fn list_all(&self) -> AgendaResult<Vec<Booking>> {
        let rows = booking::get_all_bookings(&self.pool)
            .await
            .wrap_err("failed to load bookings")?;
        into_bookings(rows)
    }

    async fn list_by_requester(&self, requester_id: &str) -> AgendaResult<Vec<Booking>> {
        let rows = booking::get_bookings_by_requester(&self.pool, requester_id)
            .await
            .wrap_err_with(|| format!("failed to load bookings of {}", requester_id))?;
        into_bookings(rows)
    }

    async fn insert(&self, new_booking: NewBooking) -> AgendaResult<Booking> {
        let row = booking::insert_booking(
            &self.pool,
            &booking::InsertBooking {
                booking_date: new_booking.date,
                slot: new_booking.slot.time(),
                requester_id: &new_booking.requester.id,
                requester_display_name: &new_booking.requester.display_name,
                requester_contact: &new_booking.requester.contact,
                note: &new_booking.note,
                created_at: new_booking.created_at,
            },
        )
        .await
        .wrap_err("failed to insert booking")?
        .ok_or(AgendaError::SlotAlreadyBooked {
            date: new_booking.date,
            slot: new_booking.slot,
        })?;

        Ok(Booking::try_from(row)?)
    }

    async fn delete_by_id(&self, id: Uuid) -> AgendaResult<()> {
        let deleted = booking::delete_booking_by_id(&self.pool, id)
            .await
            .wrap_err_with(|| format!("failed to delete booking {}", id))?;

        if deleted {
            Ok(())
        } else {
            Err(AgendaError::NotFound(id))
        }
    }
}

/// Reads the administrator capability from `users.role`.
#[derive(Clone)]
pub struct PgRoleDirectory {
    pool: DbPool,
}

impl PgRoleDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleDirectory for PgRoleDirectory {
    async fn is_admin(&self, user_id: &str) -> AgendaResult<bool> {
        let user = user::get_user_by_id(&self.pool, user_id)
            .await
            .wrap_err_with(|| format!("failed to load role of {}", user_id))?;

        Ok(user.is_some_and(|u| u.role == ADMIN_ROLE))
    }
}
