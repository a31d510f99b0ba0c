//! Catalog display formatting
//!
//! Formats services, time slots and bookable days for terminal output.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ServiceCatalog, TimeSlots};
use crate::wizard::{DatePolicy, DayAvailability, MonthView};

#[derive(Tabled)]
struct ServiceRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Service")]
    title: &'a str,
    #[tabled(rename = "Price")]
    price: &'a str,
}

/// Format the service catalog as a table
pub fn format_service_table(catalog: &ServiceCatalog) -> String {
    if catalog.is_empty() {
        return "No services configured.".to_string();
    }

    let rows: Vec<ServiceRow> = catalog
        .iter()
        .map(|e| ServiceRow {
            id: e.id.as_str(),
            title: &e.title,
            price: &e.price,
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format time slots, one row per half-day block
pub fn format_slot_list(slots: &TimeSlots) -> String {
    let mut output = String::new();
    for chunk in slots.iter().collect::<Vec<_>>().chunks(6) {
        let row: Vec<String> = chunk.iter().map(|s| format!("{:>8}", s)).collect();
        output.push_str(&row.join("  "));
        output.push('\n');
    }
    output
}

/// Format a month grid. Unbookable days are shown as `--` (past) or `xx` (closed).
pub fn format_month(month: &MonthView, policy: &DatePolicy, today: NaiveDate) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:^27}\n", month.title()));
    output.push_str("Su  Mo  Tu  We  Th  Fr  Sa\n");

    for week in month.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => "  ".to_string(),
                Some(date) => match policy.availability(*date, today) {
                    DayAvailability::Open => format!("{:>2}", date.format("%-d")),
                    DayAvailability::Past => "--".to_string(),
                    DayAvailability::Closed => "xx".to_string(),
                },
            })
            .collect();
        output.push_str(cells.join("  ").trim_end());
        output.push('\n');
    }

    output.push_str(&format!(
        "\n-- past   xx closed ({})\n",
        policy.closed_weekday()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_service_table_lists_every_service() {
        let table = format_service_table(&ServiceCatalog::default());
        assert!(table.contains("Teeth Whitening"));
        assert!(table.contains("From $999"));
        assert!(table.contains("emergency"));
    }

    #[test]
    fn test_slot_list_rows() {
        let output = format_slot_list(&TimeSlots::default());
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("10:00 AM"));
    }

    #[test]
    fn test_month_marks_unavailable_days() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let month = MonthView::containing(today);
        let output = format_month(&month, &DatePolicy::new(Weekday::Sun), today);

        assert!(output.contains("October 2026"));
        // 1st..15th are past, 18th is a Sunday
        let third_week = output.lines().nth(4).unwrap();
        assert_eq!(third_week, "--  --  --  --  --  16  17");
        let fourth_week = output.lines().nth(5).unwrap();
        assert!(fourth_week.starts_with("xx  19  20"));
        assert!(output.contains("xx closed (Sun)"));
    }
}
