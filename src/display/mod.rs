//! Display formatting for terminal output
//!
//! Provides utilities for formatting the catalog, the calendar and booking
//! summaries for plain (non-TUI) terminal output.

pub mod booking;
pub mod catalog;

pub use booking::{format_confirmation, format_summary};
pub use catalog::{format_month, format_service_table, format_slot_list};
