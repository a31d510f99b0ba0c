//! Non-interactive booking
//!
//! Drives the same wizard the TUI uses, one step at a time, so a booking
//! made here is held to exactly the same rules.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_confirmation, format_summary};
use crate::error::{BookingError, BookingResult};
use crate::models::ServiceId;
use crate::wizard::{BookingSummary, BookingWizard, ContactField};

/// Arguments for `dentalzen book`
#[derive(Args, Debug, Clone)]
pub struct BookArgs {
    /// Service ID (see `dentalzen services`)
    #[arg(short, long)]
    pub service: String,
    /// Appointment date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,
    /// Time slot, e.g. "10:00 AM" (see `dentalzen slots`)
    #[arg(short, long)]
    pub time: String,
    /// Full name
    #[arg(short, long)]
    pub name: String,
    /// Phone number
    #[arg(short, long)]
    pub phone: String,
    /// Email address
    #[arg(short, long)]
    pub email: String,
    /// Concerns or special requests
    #[arg(long)]
    pub notes: Option<String>,
}

/// Run the booking through the wizard
pub fn book(settings: &Settings, args: &BookArgs, today: NaiveDate) -> BookingResult<BookingSummary> {
    let mut wizard = BookingWizard::from_settings(settings);

    wizard.select_service(&ServiceId::from(args.service.trim()))?;
    wizard.try_next()?;

    let date = NaiveDate::parse_from_str(args.date.trim(), "%Y-%m-%d").map_err(|_| {
        BookingError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", args.date))
    })?;
    wizard.select_date(date, today)?;
    wizard.select_time(&args.time)?;
    wizard.try_next()?;

    wizard.update_field(ContactField::Name, &args.name);
    wizard.update_field(ContactField::Phone, &args.phone);
    wizard.update_field(ContactField::Email, &args.email);
    if let Some(notes) = &args.notes {
        wizard.update_field(ContactField::Notes, notes);
    }
    wizard.try_next()?;

    wizard.submit()
}

/// Handle `dentalzen book`
pub fn handle_book_command(settings: &Settings, args: BookArgs, today: NaiveDate) -> BookingResult<()> {
    let summary = book(settings, &args, today)?;

    println!("{}", format_confirmation(&summary, &settings.date_format));
    println!();
    println!("{}", format_summary(&summary, &settings.date_format));

    Ok(())
}
