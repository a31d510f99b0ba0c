//! Custom error types for DentalZen
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

use crate::wizard::Step;

/// The main error type for DentalZen operations
#[derive(Error, Debug)]
pub enum BookingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The date is in the past or on the clinic's closed day
    #[error("Date is not available for booking: {0}")]
    DateUnavailable(NaiveDate),

    /// The wizard cannot leave this step until it is complete
    #[error("Step '{}' is incomplete: {reason}", step.label())]
    StepIncomplete { step: Step, reason: String },
}

impl BookingError {
    /// Create a "not found" error for catalog services
    pub fn service_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Service",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for time slots
    pub fn slot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Time slot",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::DateUnavailable(_) | Self::StepIncomplete { .. }
        )
    }
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for DentalZen operations
pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookingError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BookingError::service_not_found("braces");
        assert_eq!(err.to_string(), "Service not found: braces");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_step_incomplete_error() {
        let err = BookingError::StepIncomplete {
            step: Step::ContactInfo,
            reason: "email must contain '@'".into(),
        };
        assert_eq!(
            err.to_string(),
            "Step 'Your Info' is incomplete: email must contain '@'"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let booking_err: BookingError = io_err.into();
        assert!(matches!(booking_err, BookingError::Io(_)));
    }
}
