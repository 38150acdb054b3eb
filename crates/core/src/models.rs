pub mod booking;
pub mod identity;
pub mod slot;
