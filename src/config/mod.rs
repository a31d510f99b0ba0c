//! Configuration module for DentalZen
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Clinic settings persistence (closed day, catalog overrides, timings)

pub mod paths;
pub mod settings;

pub use paths::BookingPaths;
pub use settings::Settings;
