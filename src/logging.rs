//! Log setup
//!
//! The TUI owns the terminal, so log lines go to `booking.log` in the data
//! directory. `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{BookingPaths, Settings};
use crate::error::{BookingError, BookingResult};

/// Install the global subscriber writing to the log file
pub fn init(paths: &BookingPaths, settings: &Settings) -> BookingResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| BookingError::Io(format!("Failed to open log file: {}", e)))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .map_err(|e| BookingError::Config(format!("Invalid log level: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| BookingError::Config(format!("Failed to initialize logging: {}", e)))
}
