//! Reference data models for DentalZen
//!
//! Static, read-only data the booking wizard selects from: the service
//! catalog and the list of bookable time slots.

pub mod ids;
pub mod service;
pub mod slot;

pub use ids::ServiceId;
pub use service::{ServiceCatalog, ServiceEntry};
pub use slot::TimeSlots;
