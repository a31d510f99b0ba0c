//! Landing screen
//!
//! Clinic banner, the services on offer, and the call to book.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;

/// Render the header banner
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            app.settings.clinic_name.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Gentle, modern dental care", Style::default().fg(Color::DarkGray)),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(header, area);
}

/// Render the landing content
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Call to action
            Constraint::Min(4),    // Services
        ])
        .margin(1)
        .split(area);

    let cta = Paragraph::new(vec![
        Line::from(Span::styled(
            "Book your visit in under a minute",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("b", Style::default().fg(Color::Yellow)),
            Span::raw(" or "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" to choose a service, a time and confirm."),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(cta, chunks[0]);

    let rows: Vec<Row> = app
        .booking
        .wizard
        .catalog()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Span::styled(entry.title.as_str(), Style::default().fg(Color::White)),
                Span::styled(entry.price.as_str(), Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    let closed = app.settings.closed_weekday;
    let table = Table::new(rows, [Constraint::Length(24), Constraint::Length(12)])
        .header(
            Row::new(vec!["Service", "Price"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title(" Our services ")
                .title_bottom(Line::from(format!(" Closed on {} ", closed)).right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    let width = area.width.min(44);
    let services_area = Rect {
        x: chunks[1].x + chunks[1].width.saturating_sub(width) / 2,
        width,
        ..chunks[1]
    };
    frame.render_widget(table, services_area);
}
