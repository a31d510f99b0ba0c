//! Dialog components for the TUI

pub mod booking;
pub mod help;
