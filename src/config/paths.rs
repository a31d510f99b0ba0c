//! Path management for DentalZen
//!
//! Provides XDG-compliant path resolution for the settings file and log file.
//!
//! ## Path Resolution Order
//!
//! 1. `DENTALZEN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/dentalzen` or `~/.config/dentalzen`
//! 3. Otherwise the platform config directory reported by `directories`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BookingError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "DENTALZEN_DATA_DIR";

/// Manages all paths used by DentalZen
#[derive(Debug, Clone)]
pub struct BookingPaths {
    /// Base directory for all DentalZen files
    base_dir: PathBuf,
}

impl BookingPaths {
    /// Create a new BookingPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or platform config directory can be found.
    pub fn new() -> Result<Self, BookingError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BookingPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/dentalzen/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("booking.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BookingError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BookingError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if DentalZen has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BookingError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("dentalzen"));
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home).join(".config").join("dentalzen"));
    }
    project_config_dir()
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BookingError> {
    project_config_dir()
}

fn project_config_dir() -> Result<PathBuf, BookingError> {
    ProjectDirs::from("com", "DentalZen", "dentalzen")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BookingError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookingPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("booking.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("dentalzen");
        let paths = BookingPaths::with_base_dir(nested.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
