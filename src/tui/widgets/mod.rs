//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod calendar;
pub mod celebration;
pub mod input;
pub mod notification;

// Re-export commonly used widgets
pub use calendar::CalendarWidget;
pub use celebration::{Celebration, CelebrationWidget};
pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
