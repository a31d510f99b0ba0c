//! The booking wizard state machine
//!
//! Owns the transient [`WizardState`] for one open/close cycle and is the
//! only thing allowed to mutate it. Field mutations are allowed on any
//! step; moving forward is gated on the current step being complete.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{BookingError, BookingResult};
use crate::models::{ServiceCatalog, ServiceEntry, ServiceId, TimeSlots};

use super::availability::DatePolicy;
use super::contact::{ContactField, ContactInfo};
use super::step::{Nav, Step};
use super::summary::BookingSummary;

/// Everything the patient has entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    pub selected_service: Option<ServiceId>,
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
    pub contact: ContactInfo,
}

impl WizardState {
    /// True when nothing has been entered and the wizard is on its first step
    pub fn is_pristine(&self) -> bool {
        *self == WizardState::default()
    }
}

/// Four-step booking form controller
#[derive(Debug, Clone)]
pub struct BookingWizard {
    catalog: ServiceCatalog,
    slots: TimeSlots,
    policy: DatePolicy,
    state: WizardState,
}

impl BookingWizard {
    pub fn new(catalog: ServiceCatalog, slots: TimeSlots, policy: DatePolicy) -> Self {
        Self {
            catalog,
            slots,
            policy,
            state: WizardState::default(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn slots(&self) -> &TimeSlots {
        &self.slots
    }

    pub fn policy(&self) -> &DatePolicy {
        &self.policy
    }

    /// Back to step 0 with every field empty
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        debug!("Booking wizard reset");
    }

    /// Pick a service from the catalog
    pub fn select_service(&mut self, id: &ServiceId) -> BookingResult<()> {
        if !self.catalog.contains(id) {
            return Err(BookingError::service_not_found(id.as_str()));
        }
        debug!(service = %id, "Service selected");
        self.state.selected_service = Some(id.clone());
        Ok(())
    }

    /// Pick an appointment day. Past days and the closed weekday are refused
    /// and leave the current selection untouched.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> BookingResult<()> {
        if !self.policy.is_selectable(date, today) {
            debug!(%date, availability = ?self.policy.availability(date, today), "Date refused");
            return Err(BookingError::DateUnavailable(date));
        }
        debug!(%date, "Date selected");
        self.state.selected_date = Some(date);
        Ok(())
    }

    /// Pick one of the offered slots
    pub fn select_time(&mut self, slot: &str) -> BookingResult<()> {
        let label = self
            .slots
            .find(slot)
            .ok_or_else(|| BookingError::slot_not_found(slot))?
            .to_string();
        debug!(slot = %label, "Time selected");
        self.state.selected_time = Some(label);
        Ok(())
    }

    /// Store a contact field, sanitized for that field
    pub fn update_field(&mut self, field: ContactField, value: &str) {
        self.state.contact.set(field, value);
    }

    pub fn selected_service(&self) -> Option<&ServiceEntry> {
        self.state
            .selected_service
            .as_ref()
            .and_then(|id| self.catalog.get(id))
    }

    /// Why the current step cannot be left forward, if it can't
    pub fn incomplete_reason(&self) -> Option<&'static str> {
        let state = &self.state;
        match state.step {
            Step::ServiceSelection if state.selected_service.is_none() => {
                Some("choose a service")
            }
            Step::DateTime if state.selected_date.is_none() => Some("choose a date"),
            Step::DateTime if state.selected_time.is_none() => Some("choose a time slot"),
            Step::ContactInfo => state.contact.missing(),
            _ => None,
        }
    }

    /// Whether the forward control (Continue or Confirm) is enabled
    pub fn can_advance(&self) -> bool {
        self.incomplete_reason().is_none()
    }

    /// Advance one step if the current one is complete; otherwise do nothing
    pub fn next(&mut self) -> Step {
        if self.can_advance() {
            self.navigate(Nav::Next);
        }
        self.state.step
    }

    /// Advance one step, reporting why not if the current one is incomplete
    pub fn try_next(&mut self) -> BookingResult<Step> {
        if let Some(reason) = self.incomplete_reason() {
            return Err(BookingError::StepIncomplete {
                step: self.state.step,
                reason: reason.to_string(),
            });
        }
        Ok(self.navigate(Nav::Next))
    }

    /// Go back one step. Never blocked and never clears entered data.
    pub fn back(&mut self) -> Step {
        self.navigate(Nav::Back)
    }

    fn navigate(&mut self, nav: Nav) -> Step {
        let from = self.state.step;
        let to = from.transition(nav);
        if from != to {
            debug!(from = %from, to = %to, "Wizard step changed");
        }
        self.state.step = to;
        to
    }

    /// Finish the booking. Only allowed on the confirmation step.
    ///
    /// Returns what was booked; the caller decides when to close and reset.
    pub fn submit(&self) -> BookingResult<BookingSummary> {
        if self.state.step != Step::Confirmation {
            return Err(BookingError::StepIncomplete {
                step: self.state.step,
                reason: "booking can only be confirmed on the last step".into(),
            });
        }

        let summary = self.build_summary()?;
        let email_domain = summary.contact.email().rsplit('@').next().unwrap_or_default();
        info!(
            service = %summary.service.id,
            date = %summary.date,
            time = %summary.time,
            email_domain,
            "Booking submitted"
        );

        Ok(summary)
    }

    /// The booking as it stands, if every step is complete
    pub fn preview(&self) -> Option<BookingSummary> {
        self.build_summary().ok()
    }

    fn build_summary(&self) -> BookingResult<BookingSummary> {
        let state = &self.state;
        let service = self
            .selected_service()
            .cloned()
            .ok_or_else(|| incomplete(Step::ServiceSelection, "choose a service"))?;
        let date = state
            .selected_date
            .ok_or_else(|| incomplete(Step::DateTime, "choose a date"))?;
        let time = state
            .selected_time
            .clone()
            .ok_or_else(|| incomplete(Step::DateTime, "choose a time slot"))?;
        if let Some(reason) = state.contact.missing() {
            return Err(incomplete(Step::ContactInfo, reason));
        }

        Ok(BookingSummary {
            service,
            date,
            time,
            contact: state.contact.clone(),
        })
    }
}

fn incomplete(step: Step, reason: &str) -> BookingError {
    BookingError::StepIncomplete {
        step,
        reason: reason.to_string(),
    }
}
