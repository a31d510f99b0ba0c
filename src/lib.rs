//! DentalZen - Terminal booking wizard for a dental clinic
//!
//! This library provides the booking flow behind the `dentalzen` binary: a
//! four-step wizard (service, date & time, contact details, confirmation)
//! that both the interactive TUI and the `book` command drive.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Service catalog and time slots
//! - `wizard`: The booking state machine, input rules and date policy
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: Command handlers
//! - `tui`: The interactive booking screen
//! - `logging`: File-backed tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use dentalzen::config::{BookingPaths, Settings};
//! use dentalzen::wizard::BookingWizard;
//!
//! let paths = BookingPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut wizard = BookingWizard::from_settings(&settings);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod tui;
pub mod wizard;

pub use error::BookingError;
