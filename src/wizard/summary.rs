//! What a completed booking produces
//!
//! Submission is simulated: nothing leaves the process. The summary feeds
//! the confirmation screen and the one-shot confirmation notification.

use chrono::NaiveDate;

use crate::models::ServiceEntry;

use super::contact::ContactInfo;

/// A confirmed appointment request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub service: ServiceEntry,
    pub date: NaiveDate,
    pub time: String,
    pub contact: ContactInfo,
}

impl BookingSummary {
    /// The notification event emitted once on submission
    pub fn confirmation(&self) -> BookingConfirmation {
        BookingConfirmation {
            date: self.date,
            time: self.time.clone(),
            email: self.contact.email().to_string(),
        }
    }
}

/// Fire-and-forget notification payload: `{date, time, email}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub date: NaiveDate,
    pub time: String,
    pub email: String,
}

impl BookingConfirmation {
    pub const TITLE: &'static str = "Appointment Booked!";

    /// Body text, with the date rendered using `date_format`
    pub fn message(&self, date_format: &str) -> String {
        format!(
            "We'll see you on {} at {}. A confirmation has been sent to {}.",
            self.date.format(date_format),
            self.time,
            self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::contact::ContactField;

    #[test]
    fn test_confirmation_message() {
        let mut contact = ContactInfo::new();
        contact.set(ContactField::Email, "jane@x.com");
        let summary = BookingSummary {
            service: ServiceEntry::new("whitening", "Teeth Whitening", "From $199"),
            date: NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
            time: "10:00 AM".into(),
            contact,
        };

        let message = summary.confirmation().message("%B %-d, %Y");
        assert_eq!(
            message,
            "We'll see you on October 21, 2026 at 10:00 AM. A confirmation has been sent to jane@x.com."
        );
    }
}
