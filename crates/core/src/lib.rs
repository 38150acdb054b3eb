//! # Agenda Core
//!
//! Domain types and scheduling logic for booking fixed time slots with staff.
//!
//! - [`catalog::SlotCatalog`]: the ordered set of bookable times of a day
//! - [`resolver::AvailabilityResolver`]: free slots of a date
//! - [`service::BookingService`]: validated, conflict-checked booking creation
//! - [`revocation::AdminRevocation`]: staff removal of bookings
//!
//! Persistence and authorization are reached through the traits in [`store`],
//! with an in-memory implementation in [`memory`].

pub mod catalog;
pub mod clock;
pub mod errors;
pub mod memory;
pub mod models;
pub mod resolver;
pub mod revocation;
pub mod service;
pub mod store;
