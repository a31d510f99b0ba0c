//! Booking wizard
//!
//! A four-step linear form: pick a service, pick a date and time slot,
//! enter contact details, confirm. Everything here is UI-independent so the
//! TUI and the `book` command drive the same state machine.

pub mod availability;
pub mod contact;
pub mod schedule;
pub mod state;
pub mod step;
pub mod summary;

pub use availability::{DatePolicy, DayAvailability, MonthView};
pub use contact::{ContactField, ContactInfo};
pub use schedule::{CancelToken, Deferred};
pub use state::{BookingWizard, WizardState};
pub use step::{Nav, Step};
pub use summary::{BookingConfirmation, BookingSummary};

use crate::config::Settings;

impl BookingWizard {
    /// A wizard over the catalog, slots and closed day from `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.catalog(), settings.time_slots(), settings.date_policy())
    }
}
