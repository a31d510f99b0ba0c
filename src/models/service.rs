//! Service catalog
//!
//! Read-only reference data: the treatments a patient can book, in display
//! order. The wizard only ever holds a [`ServiceId`] into this catalog.

use serde::{Deserialize, Serialize};

use super::ids::ServiceId;

/// One bookable treatment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: ServiceId,
    /// Display title, e.g. "Teeth Whitening"
    pub title: String,
    /// Display price, e.g. "From $199"
    pub price: String,
}

impl ServiceEntry {
    pub fn new(id: impl Into<ServiceId>, title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
        }
    }
}

/// Ordered, read-only list of services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalog {
    entries: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<ServiceEntry>) -> Self {
        Self { entries }
    }

    /// Look up a service by id
    pub fn get(&self, id: &ServiceId) -> Option<&ServiceEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Position of a service in display order
    pub fn position(&self, id: &ServiceId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ServiceId) -> bool {
        self.get(id).is_some()
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new(vec![
            ServiceEntry::new("cosmetic", "Cosmetic Dentistry", "From $299"),
            ServiceEntry::new("diagnostics", "AI Diagnostics", "From $149"),
            ServiceEntry::new("whitening", "Teeth Whitening", "From $199"),
            ServiceEntry::new("pediatric", "Pediatric Care", "From $99"),
            ServiceEntry::new("implants", "Dental Implants", "From $999"),
            ServiceEntry::new("emergency", "Emergency Care", "From $249"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = ServiceCatalog::default();
        let ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            ["cosmetic", "diagnostics", "whitening", "pediatric", "implants", "emergency"]
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = ServiceCatalog::default();
        let whitening = catalog.get(&ServiceId::from("whitening")).unwrap();
        assert_eq!(whitening.title, "Teeth Whitening");
        assert_eq!(whitening.price, "From $199");
        assert_eq!(catalog.position(&ServiceId::from("whitening")), Some(2));
        assert!(!catalog.contains(&ServiceId::from("braces")));
    }
}
