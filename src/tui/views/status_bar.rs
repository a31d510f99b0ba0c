//! Status bar view
//!
//! Shows the current step while booking, status messages, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveDialog, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(
        format!(" {} ", app.today.format("%a %b %-d")),
        Style::default().fg(Color::Cyan),
    ));

    if app.active_dialog == ActiveDialog::Booking {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Booking: {}", app.booking.step()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.active_dialog {
        ActiveDialog::Booking => " Esc:Close  Ctrl+B:Back ",
        _ => " b:Book  ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
