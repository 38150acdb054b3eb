use agenda_core::{
    errors::AgendaResult,
    models::booking::{Booking, NewBooking},
    store::{BookingStore, RoleDirectory},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

// Mock repositories for testing
mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingStore for BookingRepo {
        async fn list_by_date(&self, date: NaiveDate) -> AgendaResult<Vec<Booking>>;

        async fn list_all(&self) -> AgendaResult<Vec<Booking>>;

        async fn list_by_requester(&self, requester_id: &str) -> AgendaResult<Vec<Booking>>;

        async fn insert(&self, booking: NewBooking) -> AgendaResult<Booking>;

        async fn delete_by_id(&self, id: Uuid) -> AgendaResult<()>;
    }
}

mock! {
    pub RoleRepo {}

    #[async_trait]
    impl RoleDirectory for RoleRepo {
        async fn is_admin(&self, user_id: &str) -> AgendaResult<bool>;
    }
}
