//! Clinic settings for DentalZen
//!
//! Manages the clinic's booking preferences: which weekday the clinic is
//! closed, the service catalog and slot list, and the timings of the
//! post-submission close sequence.

use std::collections::HashSet;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::paths::BookingPaths;
use crate::error::BookingError;
use crate::models::{ServiceCatalog, ServiceEntry, TimeSlots};
use crate::wizard::DatePolicy;

/// Settings for DentalZen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Clinic name shown in the TUI header
    #[serde(default = "default_clinic_name")]
    pub clinic_name: String,

    /// Weekday on which no appointments can be booked
    #[serde(default = "default_closed_weekday")]
    pub closed_weekday: Weekday,

    /// Date format used in summaries and notifications (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Delay between submitting and the wizard closing itself
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,

    /// How long the celebration effect runs after a booking
    #[serde(default = "default_celebration_secs")]
    pub celebration_secs: u64,

    /// How long toast notifications stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Service catalog override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceEntry>>,

    /// Time slot override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slots: Option<Vec<String>>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_clinic_name() -> String {
    "DentalZen".to_string()
}

fn default_closed_weekday() -> Weekday {
    Weekday::Sun
}

fn default_date_format() -> String {
    "%B %-d, %Y".to_string()
}

fn default_close_delay_ms() -> u64 {
    500
}

fn default_celebration_secs() -> u64 {
    3
}

fn default_notification_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            clinic_name: default_clinic_name(),
            closed_weekday: default_closed_weekday(),
            date_format: default_date_format(),
            close_delay_ms: default_close_delay_ms(),
            celebration_secs: default_celebration_secs(),
            notification_secs: default_notification_secs(),
            log_level: default_log_level(),
            services: None,
            time_slots: None,
        }
    }
}

impl Settings {
    /// The service catalog, falling back to the built-in one
    pub fn catalog(&self) -> ServiceCatalog {
        match &self.services {
            Some(entries) => ServiceCatalog::new(entries.clone()),
            None => ServiceCatalog::default(),
        }
    }

    /// The bookable time slots, falling back to the built-in list
    pub fn time_slots(&self) -> TimeSlots {
        match &self.time_slots {
            Some(labels) => TimeSlots::new(labels.clone()),
            None => TimeSlots::default(),
        }
    }

    /// The date selection policy for the configured closed day
    pub fn date_policy(&self) -> DatePolicy {
        DatePolicy::new(self.closed_weekday)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    pub fn celebration_duration(&self) -> Duration {
        Duration::from_secs(self.celebration_secs)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    /// Check that the overrides describe something bookable
    pub fn validate(&self) -> Result<(), BookingError> {
        if let Some(entries) = &self.services {
            if entries.is_empty() {
                return Err(BookingError::Config("Service catalog cannot be empty".into()));
            }
            let mut seen = HashSet::new();
            for entry in entries {
                if entry.id.as_str().trim().is_empty() {
                    return Err(BookingError::Config("Service id cannot be empty".into()));
                }
                if !seen.insert(entry.id.as_str()) {
                    return Err(BookingError::Config(format!(
                        "Duplicate service id: {}",
                        entry.id
                    )));
                }
            }
        }

        if let Some(labels) = &self.time_slots {
            if labels.is_empty() {
                return Err(BookingError::Config("Time slot list cannot be empty".into()));
            }
            // Slot lookup ignores case and surrounding whitespace
            let mut seen = HashSet::new();
            for label in labels {
                let key = label.trim().to_lowercase();
                if key.is_empty() {
                    return Err(BookingError::Config("Time slot label cannot be empty".into()));
                }
                if !seen.insert(key) {
                    return Err(BookingError::Config(format!(
                        "Duplicate time slot: {}",
                        label
                    )));
                }
            }
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(BookingError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BookingPaths) -> Result<Self, BookingError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BookingError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BookingError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BookingPaths) -> Result<(), BookingError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BookingError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BookingError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.closed_weekday, Weekday::Sun);
        assert_eq!(settings.close_delay(), Duration::from_millis(500));
        assert_eq!(settings.catalog().len(), 6);
        assert_eq!(settings.time_slots().len(), 17);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookingPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.closed_weekday = Weekday::Mon;
        settings.clinic_name = "Bright Smiles".into();
        settings.time_slots = Some(vec!["9:00 AM".into(), "9:30 AM".into()]);

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.closed_weekday, Weekday::Mon);
        assert_eq!(loaded.clinic_name, "Bright Smiles");
        assert_eq!(loaded.time_slots().len(), 2);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"clinic_name": "Zen"}"#).unwrap();
        assert_eq!(settings.clinic_name, "Zen");
        assert_eq!(settings.date_format, "%B %-d, %Y");
        assert_eq!(settings.notification_secs, 5);
    }

    #[test]
    fn test_duplicate_service_ids_rejected() {
        let entry = ServiceEntry::new("whitening", "Teeth Whitening", "From $199");
        let settings = Settings {
            services: Some(vec![entry.clone(), entry]),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(BookingError::Config(_))));
    }

    #[test]
    fn test_empty_slots_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookingPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"time_slots": []}"#).unwrap();

        assert!(Settings::load_or_create(&paths).is_err());
    }

    #[test]
    fn test_duplicate_slot_labels_rejected() {
        let settings = Settings {
            time_slots: Some(vec!["9:00 AM".into(), " 9:00 am".into()]),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(BookingError::Config(_))));

        let blank = Settings {
            time_slots: Some(vec!["9:00 AM".into(), "  ".into()]),
            ..Settings::default()
        };
        assert!(matches!(blank.validate(), Err(BookingError::Config(_))));
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let settings: Settings = serde_json::from_str(r#"{"date_format": "%Q"}"#).unwrap();
        assert!(matches!(settings.validate(), Err(BookingError::Config(_))));

        let temp_dir = TempDir::new().unwrap();
        let paths = BookingPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();
        assert!(Settings::load_or_create(&paths).is_err());

        let custom = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        assert!(custom.validate().is_ok());
    }
}
