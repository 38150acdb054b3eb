use std::{collections::HashSet, sync::Arc};

use chrono::NaiveDate;
use tracing::debug;

use crate::catalog::SlotCatalog;
use crate::errors::AgendaResult;
use crate::models::{booking::Availability, slot::Slot};
use crate::store::BookingStore;

/// Computes which catalog slots of a date are still free.
///
/// The answer reflects the store at the moment of the call only; nothing is
/// reserved, and a later booking attempt may still lose the slot.
#[derive(Clone)]
pub struct AvailabilityResolver {
    catalog: Arc<SlotCatalog>,
    store: Arc<dyn BookingStore>,
}

impl AvailabilityResolver {
    pub fn new(catalog: Arc<SlotCatalog>, store: Arc<dyn BookingStore>) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    /// Catalog slots of `date` without a booking, in catalog order.
    pub async fn available_slots(&self, date: NaiveDate) -> AgendaResult<Availability> {
        let booked = self.booked_set(date).await?;
        let slots: Vec<Slot> = self
            .catalog
            .list_slots()
            .iter()
            .filter(|slot| !booked.contains(*slot))
            .copied()
            .collect();

        debug!(%date, free = slots.len(), booked = booked.len(), "Resolved availability");
        Ok(Availability { date, slots })
    }

    /// Catalog slots of `date` that hold a booking, in catalog order.
    pub async fn booked_slots(&self, date: NaiveDate) -> AgendaResult<Vec<Slot>> {
        let booked = self.booked_set(date).await?;
        Ok(self
            .catalog
            .list_slots()
            .iter()
            .filter(|slot| booked.contains(*slot))
            .copied()
            .collect())
    }

    async fn booked_set(&self, date: NaiveDate) -> AgendaResult<HashSet<Slot>> {
        let bookings = self.store.list_by_date(date).await?;
        Ok(bookings
            .into_iter()
            .filter(|booking| booking.date == date)
            .map(|booking| booking.slot)
            .collect())
    }
}
