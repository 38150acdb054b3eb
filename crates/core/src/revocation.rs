use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::errors::{AgendaError, AgendaResult};
use crate::models::{booking::Booking, identity::Actor};
use crate::store::BookingStore;

/// Staff-only operations on existing bookings.
#[derive(Clone)]
pub struct AdminRevocation {
    store: Arc<dyn BookingStore>,
}

impl AdminRevocation {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// Deletes a booking, which frees its slot for the next availability
    /// lookup. Revoking an id that no longer exists fails with
    /// [`AgendaError::NotFound`].
    pub async fn revoke(&self, booking_id: Uuid, actor: &Actor) -> AgendaResult<()> {
        ensure_admin(actor, "revoke bookings")?;
        self.store.delete_by_id(booking_id).await?;
        info!(%booking_id, actor = %actor.id, "Booking revoked");
        Ok(())
    }

    /// Every booking, newest date first.
    pub async fn list_bookings(&self, actor: &Actor) -> AgendaResult<Vec<Booking>> {
        ensure_admin(actor, "list bookings")?;
        self.store.list_all().await
    }
}

fn ensure_admin(actor: &Actor, action: &str) -> AgendaResult<()> {
    if actor.is_admin {
        Ok(())
    } else {
        Err(AgendaError::Unauthorized(format!(
            "user {} may not {}",
            actor.id, action
        )))
    }
}
