//! Strongly-typed ID wrappers
//!
//! Catalog entries are referenced by short string slugs ("whitening").
//! Wrapping them prevents mixing service ids with slot labels or names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an entry in the service catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Create a service id from a slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

impl From<String> for ServiceId {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_id_display() {
        let id = ServiceId::from("whitening");
        assert_eq!(id.to_string(), "whitening");
        assert_eq!(id.as_str(), "whitening");
    }

    #[test]
    fn test_service_id_serializes_as_plain_string() {
        let id = ServiceId::new("implants");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"implants\"");
    }
}
