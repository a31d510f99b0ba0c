//! Catalog CLI commands
//!
//! Read-only listings of what can be booked.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_month, format_service_table, format_slot_list};
use crate::error::{BookingError, BookingResult};
use crate::wizard::MonthView;

/// Handle `dentalzen services`
pub fn handle_services_command(settings: &Settings) -> BookingResult<()> {
    println!("{}", format_service_table(&settings.catalog()));
    Ok(())
}

/// Handle `dentalzen slots`
pub fn handle_slots_command(settings: &Settings) -> BookingResult<()> {
    print!("{}", format_slot_list(&settings.time_slots()));
    Ok(())
}

/// Handle `dentalzen calendar [--month YYYY-MM]`
pub fn handle_calendar_command(
    settings: &Settings,
    month: Option<&str>,
    today: NaiveDate,
) -> BookingResult<()> {
    let view = match month {
        Some(m) => MonthView::parse(m).ok_or_else(|| {
            BookingError::Validation(format!("Invalid month '{}'. Use YYYY-MM", m))
        })?,
        None => MonthView::containing(today),
    };

    print!("{}", format_month(&view, &settings.date_policy(), today));
    Ok(())
}
