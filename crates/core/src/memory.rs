//! In-process implementations of the collaborator traits.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::{mapref::entry::Entry, DashMap};
use uuid::Uuid;

use crate::errors::{AgendaError, AgendaResult};
use crate::models::{
    booking::{Booking, NewBooking},
    slot::Slot,
};
use crate::store::{BookingStore, RoleDirectory};

/// Bookings held in memory, keyed by `(date, slot)`.
///
/// Inserts go through the map's entry API, so the vacancy check and the write
/// happen under the same shard lock.
pub struct InMemoryBookingStore {
    by_slot: DashMap<(NaiveDate, Slot), Booking>,
    by_id: DashMap<Uuid, (NaiveDate, Slot)>,
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            by_slot: DashMap::new(),
            by_id: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }

    fn collect<F>(&self, keep: F) -> Vec<Booking>
    where
        F: Fn(&Booking) -> bool,
    {
        self.by_slot
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn list_by_date(&self, date: NaiveDate) -> AgendaResult<Vec<Booking>> {
        let mut bookings = self.collect(|b| b.date == date);
        bookings.sort_by_key(|b| b.slot);
        Ok(bookings)
    }

    async fn list_all(&self) -> AgendaResult<Vec<Booking>> {
        let mut bookings = self.collect(|_| true);
        bookings.sort_by(|a, b| b.date.cmp(&a.date).then(a.slot.cmp(&b.slot)));
        Ok(bookings)
    }

    async fn list_by_requester(&self, requester_id: &str) -> AgendaResult<Vec<Booking>> {
        let mut bookings = self.collect(|b| b.requester_id == requester_id);
        bookings.sort_by_key(|b| (b.date, b.slot));
        Ok(bookings)
    }

    async fn insert(&self, booking: NewBooking) -> AgendaResult<Booking> {
        let key = (booking.date, booking.slot);
        match self.by_slot.entry(key) {
            Entry::Occupied(_) => Err(AgendaError::SlotAlreadyBooked {
                date: key.0,
                slot: key.1,
            }),
            Entry::Vacant(vacant) => {
                let id = Uuid::new_v4();
                let stored = booking.into_booking(id);
                vacant.insert(stored.clone());
                self.by_id.insert(id, key);
                Ok(stored)
            }
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> AgendaResult<()> {
        let (_, key) = self.by_id.remove(&id).ok_or(AgendaError::NotFound(id))?;
        self.by_slot.remove(&key);
        Ok(())
    }
}

/// Fixed set of administrator ids.
#[derive(Debug, Clone, Default)]
pub struct StaticRoleDirectory {
    admins: HashSet<String>,
}

impl StaticRoleDirectory {
    pub fn new<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            admins: admins.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl RoleDirectory for StaticRoleDirectory {
    async fn is_admin(&self, user_id: &str) -> AgendaResult<bool> {
        Ok(self.admins.contains(user_id))
    }
}
