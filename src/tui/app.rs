//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Time is passed in explicitly so the close sequence can be driven by tests.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::Settings;
use crate::wizard::{BookingConfirmation, BookingSummary, BookingWizard, Deferred};

use super::dialogs::booking::BookingDialogState;
use super::widgets::{Celebration, Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Booking,
    Help,
}

/// Work scheduled to run on a later tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Close the booking dialog and empty the wizard
    CloseBooking,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Booking dialog state
    pub booking: BookingDialogState,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Running celebration effect, if any
    pub celebration: Option<Celebration>,

    /// Close sequence after a submitted booking
    pub pending: Deferred<DeferredAction>,

    /// The local calendar day, refreshed every tick
    pub today: NaiveDate,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, today: NaiveDate) -> Self {
        Self {
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            booking: BookingDialogState::new(BookingWizard::from_settings(settings), today),
            notifications: NotificationQueue::new(),
            celebration: None,
            pending: Deferred::new(),
            today,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_help(&mut self) {
        self.active_dialog = ActiveDialog::Help;
    }

    pub fn close_help(&mut self) {
        if self.active_dialog == ActiveDialog::Help {
            self.active_dialog = ActiveDialog::None;
        }
    }

    /// Open the booking wizard on its first step with nothing selected
    pub fn open_booking(&mut self) {
        self.pending.cancel();
        self.booking.reset(self.today);
        self.active_dialog = ActiveDialog::Booking;
        self.clear_status();
        debug!("Booking wizard opened");
    }

    /// Close the wizard early; nothing entered so far is kept
    pub fn close_booking(&mut self, now: Instant) {
        if self.active_dialog != ActiveDialog::Booking {
            return;
        }
        let submitted = self.booking.closing;
        self.pending.cancel();
        self.booking.reset(self.today);
        self.active_dialog = ActiveDialog::None;

        if !submitted {
            self.notifications.push(
                Notification::info("Your details were not saved.", now).with_title("Booking cancelled"),
            );
            debug!("Booking wizard dismissed");
        }
    }

    /// Submit from the confirmation step
    ///
    /// Shows the confirmation toast, starts the celebration and schedules
    /// the dialog to close. Returns `None` when the wizard is not on the
    /// confirmation step or a submission is already closing.
    pub fn submit_booking(&mut self, now: Instant) -> Option<BookingSummary> {
        if self.active_dialog != ActiveDialog::Booking || self.booking.closing {
            return None;
        }
        let summary = match self.booking.wizard.submit() {
            Ok(summary) => summary,
            Err(e) => {
                self.set_status(e.to_string());
                return None;
            }
        };

        let confirmation = summary.confirmation();
        self.notifications.push(
            Notification::success(confirmation.message(&self.settings.date_format), now)
                .with_title(BookingConfirmation::TITLE)
                .with_duration(self.settings.notification_duration()),
        );
        self.celebration = Some(Celebration::new(now, self.settings.celebration_duration()));
        self.booking.closing = true;
        // Replaces anything already queued
        self.pending
            .schedule(DeferredAction::CloseBooking, self.settings.close_delay(), now);

        info!(service = %summary.service.id, "Booking confirmed in TUI");
        Some(summary)
    }

    /// Advance timers: expire toasts and the celebration, run due actions
    pub fn on_tick(&mut self, now: Instant, today: NaiveDate) {
        self.today = today;
        self.notifications.remove_expired(now);

        if self.celebration.is_some_and(|c| !c.is_active(now)) {
            self.celebration = None;
        }

        if let Some(action) = self.pending.poll(now) {
            match action {
                DeferredAction::CloseBooking => {
                    self.booking.reset(self.today);
                    if self.active_dialog == ActiveDialog::Booking {
                        self.active_dialog = ActiveDialog::None;
                    }
                    debug!("Booking wizard closed after submission");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{ContactField, Step};
    use crate::models::ServiceId;
    use std::time::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn fill_booking(app: &mut App) {
        let wizard = &mut app.booking.wizard;
        wizard.select_service(&ServiceId::from("whitening")).unwrap();
        wizard.next();
        wizard
            .select_date(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(), today())
            .unwrap();
        wizard.select_time("10:00 AM").unwrap();
        wizard.next();
        wizard.update_field(ContactField::Name, "Jane Doe");
        wizard.update_field(ContactField::Phone, "555-123-4567");
        wizard.update_field(ContactField::Email, "jane@x.com");
        wizard.next();
    }

    #[test]
    fn test_open_starts_pristine() {
        let settings = Settings::default();
        let mut app = App::new(&settings, today());
        app.open_booking();
        fill_booking(&mut app);
        app.close_booking(Instant::now());

        app.open_booking();
        assert_eq!(app.active_dialog, ActiveDialog::Booking);
        assert!(app.booking.wizard.state().is_pristine());
    }

    #[test]
    fn test_dismiss_shows_cancel_toast() {
        let settings = Settings::default();
        let mut app = App::new(&settings, today());
        app.open_booking();
        app.close_booking(Instant::now());

        assert!(!app.has_dialog());
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.title, "Booking cancelled");
    }

    #[test]
    fn test_submit_closes_after_delay() {
        let settings = Settings::default();
        let mut app = App::new(&settings, today());
        app.open_booking();
        fill_booking(&mut app);
        assert_eq!(app.booking.step(), Step::Confirmation);

        let start = Instant::now();
        let summary = app.submit_booking(start).unwrap();
        assert_eq!(summary.contact.email(), "jane@x.com");

        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.title, "Appointment Booked!");
        assert_eq!(
            toast.message,
            "We'll see you on October 21, 2026 at 10:00 AM. A confirmation has been sent to jane@x.com."
        );
        assert!(app.celebration.is_some());

        // A second Enter during the close delay does nothing
        assert!(app.submit_booking(start).is_none());

        app.on_tick(start + Duration::from_millis(100), today());
        assert_eq!(app.active_dialog, ActiveDialog::Booking);

        app.on_tick(start + settings.close_delay(), today());
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert!(app.booking.wizard.state().is_pristine());
        assert!(!app.booking.closing);
    }

    #[test]
    fn test_reopen_cancels_pending_close() {
        let settings = Settings::default();
        let mut app = App::new(&settings, today());
        app.open_booking();
        fill_booking(&mut app);
        let start = Instant::now();
        app.submit_booking(start).unwrap();

        // Closed and reopened before the delay ran out
        app.close_booking(start);
        app.open_booking();
        app.booking.wizard.select_service(&ServiceId::from("pediatric")).unwrap();

        app.on_tick(start + Duration::from_secs(2), today());
        assert_eq!(app.active_dialog, ActiveDialog::Booking);
        assert!(app.booking.wizard.state().selected_service.is_some());
    }

    #[test]
    fn test_submit_outside_confirmation_is_ignored() {
        let settings = Settings::default();
        let mut app = App::new(&settings, today());
        app.open_booking();
        assert!(app.submit_booking(Instant::now()).is_none());
        assert!(app.notifications.is_empty());
        assert!(app.celebration.is_none());
    }

    #[test]
    fn test_celebration_expires() {
        let settings = Settings::default();
        let mut app = App::new(&settings, today());
        app.open_booking();
        fill_booking(&mut app);
        let start = Instant::now();
        app.submit_booking(start);

        app.on_tick(start + Duration::from_secs(1), today());
        assert!(app.celebration.is_some());
        app.on_tick(start + settings.celebration_duration(), today());
        assert!(app.celebration.is_none());
    }
}
