//! Seams to the persistence and authorization collaborators.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::AgendaResult;
use crate::models::booking::{Booking, NewBooking};

/// Persistent collection of bookings.
///
/// Implementations must make [`BookingStore::insert`] a conditional write: of
/// any number of concurrent inserts for the same `(date, slot)`, at most one
/// succeeds and the others fail with `AgendaError::SlotAlreadyBooked`.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn list_by_date(&self, date: NaiveDate) -> AgendaResult<Vec<Booking>>;

    /// Every booking, newest date first, then by slot.
    async fn list_all(&self) -> AgendaResult<Vec<Booking>>;

    async fn list_by_requester(&self, requester_id: &str) -> AgendaResult<Vec<Booking>>;

    async fn insert(&self, booking: NewBooking) -> AgendaResult<Booking>;

    /// Fails with `AgendaError::NotFound` when no booking has this id.
    async fn delete_by_id(&self, id: Uuid) -> AgendaResult<()>;
}

/// Authorization collaborator answering whether a user holds the
/// administrative capability.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    async fn is_admin(&self, user_id: &str) -> AgendaResult<bool>;
}
