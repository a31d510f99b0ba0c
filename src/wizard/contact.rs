//! Contact details and their input sanitizers
//!
//! Every value is cleaned at the moment it is entered: over-long input is
//! cut to the field's limit and the phone number keeps only dialable
//! characters. Lengths are counted in characters, not bytes.

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_NOTES_LEN: usize = 500;
pub const MIN_PHONE_LEN: usize = 7;

/// Which contact field an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Phone,
    Email,
    Notes,
}

impl ContactField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::Email,
            Self::Email => Self::Notes,
            Self::Notes => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Notes,
            Self::Phone => Self::Name,
            Self::Email => Self::Phone,
            Self::Notes => Self::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Notes => "Notes",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Phone => "(123) 456-7890",
            Self::Email => "john@example.com",
            Self::Notes => "Any concerns or special requests...",
        }
    }

    pub fn max_len(self) -> usize {
        match self {
            Self::Name => MAX_NAME_LEN,
            Self::Phone => MAX_PHONE_LEN,
            Self::Email => MAX_EMAIL_LEN,
            Self::Notes => MAX_NOTES_LEN,
        }
    }

    /// Clean raw input for this field
    pub fn sanitize(self, raw: &str) -> String {
        match self {
            Self::Name => sanitize_name(raw),
            Self::Phone => sanitize_phone(raw),
            Self::Email => sanitize_email(raw),
            Self::Notes => sanitize_notes(raw),
        }
    }
}

fn truncate_chars(raw: &str, max: usize) -> String {
    raw.chars().take(max).collect()
}

/// Characters a phone number may contain
pub fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ')
}

pub fn sanitize_name(raw: &str) -> String {
    truncate_chars(raw, MAX_NAME_LEN)
}

/// Drop everything but digits, `+`, `-`, parentheses and spaces, then truncate
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| is_phone_char(*c)).take(MAX_PHONE_LEN).collect()
}

pub fn sanitize_email(raw: &str) -> String {
    truncate_chars(raw, MAX_EMAIL_LEN)
}

pub fn sanitize_notes(raw: &str) -> String {
    truncate_chars(raw, MAX_NOTES_LEN)
}

/// Patient contact details collected on the "Your Info" step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    name: String,
    phone: String,
    email: String,
    notes: String,
}

impl ContactInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sanitized value
    pub fn set(&mut self, field: ContactField, raw: &str) {
        let value = field.sanitize(raw);
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
            ContactField::Notes => self.notes = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Notes => &self.notes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Notes, if any were entered
    pub fn notes(&self) -> Option<&str> {
        if self.notes.trim().is_empty() {
            None
        } else {
            Some(&self.notes)
        }
    }

    /// Why these details are not yet enough to continue, if they aren't
    pub fn missing(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name is required")
        } else if self.phone.trim().chars().count() < MIN_PHONE_LEN {
            Some("phone must have at least 7 characters")
        } else if !self.email.contains('@') {
            Some("email must contain '@'")
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_none()
    }
}
