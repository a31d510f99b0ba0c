//! Wizard steps and the navigation transition table

use std::fmt;

/// One of the four screens of the booking wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    ServiceSelection,
    DateTime,
    ContactInfo,
    Confirmation,
}

/// A navigation request from the footer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Back,
}

impl Step {
    /// All steps in display order
    pub const ALL: [Step; 4] = [
        Step::ServiceSelection,
        Step::DateTime,
        Step::ContactInfo,
        Step::Confirmation,
    ];

    /// Where `nav` leads from this step.
    ///
    /// Both ends are absorbing: `Back` on the first step and `Next` on the
    /// last step stay put. Gating on step validity happens in the wizard.
    pub fn transition(self, nav: Nav) -> Step {
        match (self, nav) {
            (Step::ServiceSelection, Nav::Next) => Step::DateTime,
            (Step::DateTime, Nav::Next) => Step::ContactInfo,
            (Step::ContactInfo, Nav::Next) => Step::Confirmation,
            (Step::Confirmation, Nav::Next) => Step::Confirmation,
            (Step::ServiceSelection, Nav::Back) => Step::ServiceSelection,
            (Step::DateTime, Nav::Back) => Step::ServiceSelection,
            (Step::ContactInfo, Nav::Back) => Step::DateTime,
            (Step::Confirmation, Nav::Back) => Step::ContactInfo,
        }
    }

    /// Zero-based position
    pub fn index(self) -> usize {
        match self {
            Step::ServiceSelection => 0,
            Step::DateTime => 1,
            Step::ContactInfo => 2,
            Step::Confirmation => 3,
        }
    }

    /// Label shown in the progress header
    pub fn label(self) -> &'static str {
        match self {
            Step::ServiceSelection => "Service",
            Step::DateTime => "Date & Time",
            Step::ContactInfo => "Your Info",
            Step::Confirmation => "Confirm",
        }
    }

    pub fn is_first(self) -> bool {
        self == Step::ServiceSelection
    }

    pub fn is_last(self) -> bool {
        self == Step::Confirmation
    }

    /// Share of the wizard reached once this step is shown, in percent
    pub fn progress_percent(self) -> u16 {
        ((self.index() + 1) * 100 / Step::ALL.len()) as u16
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
