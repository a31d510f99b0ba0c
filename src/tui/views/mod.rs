//! TUI Views module
//!
//! The landing screen and status bar, with the active dialog, the toast
//! and the celebration drawn on top.

pub mod landing;
pub mod status_bar;

use std::time::Instant;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::{CelebrationWidget, NotificationWidget};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 5;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    landing::render_header(frame, app, layout.header);
    landing::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    let now = Instant::now();
    if let Some(celebration) = app.celebration.filter(|c| c.is_active(now)) {
        frame.render_widget(CelebrationWidget::new(&celebration, now), frame.area());
    }

    if let Some(notification) = app.notifications.current() {
        let area = top_right_rect(TOAST_WIDTH, TOAST_HEIGHT, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Booking => dialogs::booking::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_landing_and_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(100, 36)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("DentalZen"));
        assert!(text.contains("Book your visit"));

        app.open_booking();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Step 1 of 4"));
        assert!(text.contains("Teeth Whitening"));
        assert!(text.contains("Continue"));
        assert!(!text.contains("[Ctrl+B]"));
    }
}
