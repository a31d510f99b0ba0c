//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the booking wizard.

pub mod book;
pub mod catalog;

pub use book::{handle_book_command, BookArgs};
pub use catalog::{handle_calendar_command, handle_services_command, handle_slots_command};
