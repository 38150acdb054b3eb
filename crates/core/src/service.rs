use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::SlotCatalog;
use crate::clock::Clock;
use crate::errors::{AgendaError, AgendaResult};
use crate::models::{
    booking::{parse_date, Booking, BookingRequest, NewBooking},
    identity::Requester,
    slot::Slot,
};
use crate::store::BookingStore;

/// Validates and commits new bookings.
#[derive(Clone)]
pub struct BookingService {
    catalog: Arc<SlotCatalog>,
    store: Arc<dyn BookingStore>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        catalog: Arc<SlotCatalog>,
        store: Arc<dyn BookingStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            store,
            clock,
        }
    }

    /// Books `request.slot` on `request.date` for `requester`.
    ///
    /// Preconditions are checked in order, before the store is touched: the
    /// date is well formed and not before today, the slot is in the catalog,
    /// the note is not blank, and a requester is present. The write itself is
    /// a conditional insert, so a concurrent booking of the same slot makes
    /// this call fail with [`AgendaError::SlotAlreadyBooked`].
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
        requester: Option<&Requester>,
    ) -> AgendaResult<Booking> {
        let date = parse_date(&request.date)?;
        let today = self.clock.today();
        if date < today {
            return Err(AgendaError::InvalidDate(format!(
                "{} is in the past, bookings start from {}",
                date, today
            )));
        }

        let slot: Slot = request.slot.parse().map_err(AgendaError::InvalidSlot)?;
        if !self.catalog.contains(&slot) {
            return Err(AgendaError::InvalidSlot(format!(
                "{} is not one of the offered times",
                slot
            )));
        }

        let note = request.note.trim();
        if note.is_empty() {
            return Err(AgendaError::MissingNote);
        }

        let requester = requester
            .filter(|r| r.is_identified())
            .ok_or(AgendaError::NotAuthenticated)?;

        let new_booking = NewBooking {
            date,
            slot,
            requester: requester.clone(),
            note: note.to_string(),
            created_at: self.clock.now(),
        };

        match self.store.insert(new_booking).await {
            Ok(booking) => {
                info!(
                    booking_id = %booking.id,
                    %date,
                    %slot,
                    requester = %booking.requester_id,
                    "Booking created"
                );
                Ok(booking)
            }
            Err(err @ AgendaError::SlotAlreadyBooked { .. }) => {
                warn!(%date, %slot, requester = %requester.id, "Slot taken before commit");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Bookings held by `requester`, by date then slot.
    pub async fn bookings_for(&self, requester: Option<&Requester>) -> AgendaResult<Vec<Booking>> {
        let requester = requester
            .filter(|r| r.is_identified())
            .ok_or(AgendaError::NotAuthenticated)?;
        self.store.list_by_requester(&requester.id).await
    }
}
