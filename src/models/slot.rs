//! Bookable time-of-day slots
//!
//! Slots are fixed labels ("10:00 AM"); the wizard stores the label itself.

/// Ordered list of slot labels offered for every open day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlots {
    labels: Vec<String>,
}

impl TimeSlots {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Find the stored label matching `label`, ignoring surrounding whitespace and case
    pub fn find(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        self.labels
            .iter()
            .find(|l| l.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for TimeSlots {
    /// Half-hour slots from 8:00 AM to 5:00 PM with a lunch break after 11:30 AM
    fn default() -> Self {
        let labels = [
            "8:00 AM", "8:30 AM", "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM",
            "11:30 AM", "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM",
            "4:00 PM", "4:30 PM", "5:00 PM",
        ];
        Self::new(labels.iter().map(|l| l.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots() {
        let slots = TimeSlots::default();
        assert_eq!(slots.len(), 17);
        assert_eq!(slots.get(0), Some("8:00 AM"));
        assert_eq!(slots.get(8), Some("1:00 PM"));
        assert!(slots.find("12:00 PM").is_none());
    }

    #[test]
    fn test_find_is_lenient() {
        let slots = TimeSlots::default();
        assert_eq!(slots.find(" 10:00 am "), Some("10:00 AM"));
    }
}
