//! Help dialog
//!
//! Lists the keys for the landing screen and for each booking step

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame, _app: &mut App) {
    let help_lines = get_help_lines();
    let height = help_lines.len() as u16 + 2;
    let area = centered_rect_fixed(64, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn get_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        key_line("b/Enter", "Book a visit"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit application"),
        key_line("Ctrl+c", "Quit from anywhere"),
        Line::from(""),
        section("Booking"),
        key_line("Esc", "Close without saving"),
        key_line("Ctrl+b", "Back one step"),
        key_line("Enter", "Continue / Confirm Booking"),
        Line::from(""),
    ];

    lines.push(section("Service"));
    lines.push(key_line("j/k", "Move selection up/down"));
    lines.push(key_line("Space", "Select service"));
    lines.push(Line::from(""));

    lines.push(section("Date & Time"));
    lines.push(key_line("Arrows", "Move between days or times"));
    lines.push(key_line("PgUp/PgDn", "Previous/next month"));
    lines.push(key_line("Tab", "Switch calendar and times"));
    lines.push(key_line("Space", "Select day or time"));
    lines.push(Line::from(""));

    lines.push(section("Your Info"));
    lines.push(key_line("Tab/S-Tab", "Next/previous field"));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
