//! Booking summary formatting

use crate::wizard::BookingSummary;

/// Format the confirmation notification as printed by the `book` command
pub fn format_confirmation(summary: &BookingSummary, date_format: &str) -> String {
    let confirmation = summary.confirmation();
    format!(
        "{}\n{}",
        crate::wizard::BookingConfirmation::TITLE,
        confirmation.message(date_format)
    )
}

/// Format the booking details shown on the confirmation step
pub fn format_summary(summary: &BookingSummary, date_format: &str) -> String {
    let contact = &summary.contact;
    let mut lines = vec![
        format!("Service:  {} ({})", summary.service.title, summary.service.price),
        format!("Date:     {}", summary.date.format(date_format)),
        format!("Time:     {}", summary.time),
        format!("Name:     {}", contact.name()),
        format!("Phone:    {}", contact.phone()),
        format!("Email:    {}", contact.email()),
    ];
    if let Some(notes) = contact.notes() {
        lines.push(format!("Notes:    {}", notes));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceEntry;
    use crate::wizard::{ContactField, ContactInfo};
    use chrono::NaiveDate;

    fn summary(notes: &str) -> BookingSummary {
        let mut contact = ContactInfo::new();
        contact.set(ContactField::Name, "Jane Doe");
        contact.set(ContactField::Phone, "555-1234");
        contact.set(ContactField::Email, "jane@x.com");
        contact.set(ContactField::Notes, notes);
        BookingSummary {
            service: ServiceEntry::new("whitening", "Teeth Whitening", "From $199"),
            date: NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
            time: "10:00 AM".into(),
            contact,
        }
    }

    #[test]
    fn test_summary_without_notes() {
        let text = format_summary(&summary(""), "%Y-%m-%d");
        assert!(text.contains("Teeth Whitening (From $199)"));
        assert!(text.contains("Date:     2026-10-21"));
        assert!(!text.contains("Notes"));
    }

    #[test]
    fn test_summary_with_notes() {
        let text = format_summary(&summary("Nervous patient"), "%Y-%m-%d");
        assert!(text.ends_with("Notes:    Nervous patient"));
    }

    #[test]
    fn test_confirmation_text() {
        let text = format_confirmation(&summary(""), "%B %-d, %Y");
        assert!(text.starts_with("Appointment Booked!\n"));
        assert!(text.contains("October 21, 2026 at 10:00 AM"));
    }
}
