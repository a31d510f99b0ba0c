//! Booking wizard dialog
//!
//! Modal dialog that walks the patient through the four booking steps:
//! service list, calendar and slot grid, contact form, confirmation. The
//! [`BookingWizard`] holds the booking itself; this state only tracks what
//! is highlighted and focused.

use std::time::Instant;

use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::{CalendarWidget, TextInput};
use crate::wizard::{BookingWizard, ContactField, MonthView, Step};

/// Slots per row in the time grid
pub const SLOT_COLUMNS: usize = 4;

/// Which half of the date & time step has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTimeFocus {
    #[default]
    Calendar,
    Slots,
}

/// State for the booking dialog
#[derive(Debug, Clone)]
pub struct BookingDialogState {
    /// The booking being built
    pub wizard: BookingWizard,

    /// Highlighted row in the service list
    pub service_index: usize,

    /// Month shown in the calendar
    pub calendar_month: MonthView,

    /// Day under the calendar cursor
    pub calendar_cursor: NaiveDate,

    /// Highlighted slot in the time grid
    pub slot_index: usize,

    /// Calendar or slot grid
    pub date_time_focus: DateTimeFocus,

    /// Focused contact field
    pub contact_field: ContactField,

    pub name_input: TextInput,
    pub phone_input: TextInput,
    pub email_input: TextInput,
    pub notes_input: TextInput,

    /// Submitted and waiting to close; input is ignored
    pub closing: bool,
}

impl BookingDialogState {
    /// Create a dialog around a fresh wizard
    pub fn new(mut wizard: BookingWizard, today: NaiveDate) -> Self {
        wizard.reset();
        let cursor = wizard.policy().first_selectable(today, today);
        let mut state = Self {
            wizard,
            service_index: 0,
            calendar_month: MonthView::containing(cursor),
            calendar_cursor: cursor,
            slot_index: 0,
            date_time_focus: DateTimeFocus::Calendar,
            contact_field: ContactField::Name,
            name_input: contact_input(ContactField::Name),
            phone_input: contact_input(ContactField::Phone),
            email_input: contact_input(ContactField::Email),
            notes_input: contact_input(ContactField::Notes),
            closing: false,
        };
        state.update_focus();
        state
    }

    /// Empty every field and return to the first step
    pub fn reset(&mut self, today: NaiveDate) {
        let wizard = self.wizard.clone();
        *self = Self::new(wizard, today);
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    // Service step

    /// Move the service highlight by `delta` rows
    pub fn move_service(&mut self, delta: isize) {
        let len = self.wizard.catalog().len();
        self.service_index = offset_index(self.service_index, delta, len);
    }

    /// Select the highlighted service
    pub fn choose_highlighted_service(&mut self) -> bool {
        let Some(id) = self
            .wizard
            .catalog()
            .entries()
            .get(self.service_index)
            .map(|e| e.id.clone())
        else {
            return false;
        };
        self.wizard.select_service(&id).is_ok()
    }

    // Date & time step

    /// Move the calendar cursor; it never goes before the month of `today`
    pub fn move_cursor_days(&mut self, days: i64, today: NaiveDate) {
        let moved = if days >= 0 {
            self.calendar_cursor.checked_add_days(Days::new(days as u64))
        } else {
            self.calendar_cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            if date >= MonthView::containing(today).first_day() {
                self.calendar_cursor = date;
                self.calendar_month = MonthView::containing(date);
            }
        }
    }

    /// Show the next or previous month, keeping the cursor inside it
    pub fn change_month(&mut self, forward: bool, today: NaiveDate) {
        let month = if forward {
            self.calendar_month.next()
        } else {
            self.calendar_month.prev()
        };
        if month.last_day() < today {
            return;
        }
        self.calendar_month = month;
        self.calendar_cursor = self
            .wizard
            .policy()
            .first_selectable(month.first_day(), today);
        if !month.contains(self.calendar_cursor) {
            self.calendar_cursor = month.first_day().max(today);
        }
    }

    /// Select the day under the cursor. Disabled days are ignored.
    pub fn choose_cursor_date(&mut self, today: NaiveDate) -> bool {
        self.wizard.select_date(self.calendar_cursor, today).is_ok()
    }

    /// Move the slot highlight by `delta` cells
    pub fn move_slot(&mut self, delta: isize) {
        let len = self.wizard.slots().len();
        self.slot_index = offset_index(self.slot_index, delta, len);
    }

    /// Select the highlighted slot
    pub fn choose_highlighted_slot(&mut self) -> bool {
        let Some(label) = self.wizard.slots().get(self.slot_index).map(str::to_string) else {
            return false;
        };
        self.wizard.select_time(&label).is_ok()
    }

    /// Toggle between calendar and slots; slots only once a date is chosen
    pub fn toggle_date_time_focus(&mut self) {
        self.date_time_focus = match self.date_time_focus {
            DateTimeFocus::Calendar if self.wizard.state().selected_date.is_some() => {
                DateTimeFocus::Slots
            }
            _ => DateTimeFocus::Calendar,
        };
    }

    // Contact step

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.contact_field = self.contact_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.contact_field = self.contact_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        let field = self.contact_field;
        self.name_input.focused = field == ContactField::Name;
        self.phone_input.focused = field == ContactField::Phone;
        self.email_input.focused = field == ContactField::Email;
        self.notes_input.focused = field == ContactField::Notes;
    }

    pub fn input(&self, field: ContactField) -> &TextInput {
        match field {
            ContactField::Name => &self.name_input,
            ContactField::Phone => &self.phone_input,
            ContactField::Email => &self.email_input,
            ContactField::Notes => &self.notes_input,
        }
    }

    fn input_mut(&mut self, field: ContactField) -> &mut TextInput {
        match field {
            ContactField::Name => &mut self.name_input,
            ContactField::Phone => &mut self.phone_input,
            ContactField::Email => &mut self.email_input,
            ContactField::Notes => &mut self.notes_input,
        }
    }

    /// Apply an edit to the focused input and store the sanitized result
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let field = self.contact_field;
        let input = self.input_mut(field);
        edit(input);
        let raw = input.value().to_string();
        let edited_cursor = input.cursor;

        self.wizard.update_field(field, &raw);
        let stored = self.wizard.state().contact.get(field).to_string();

        // Sanitizers only drop characters, so the cursor lands after
        // whatever survives of the text before it
        let cursor = if stored == raw {
            edited_cursor
        } else {
            let before: String = raw.chars().take(edited_cursor).collect();
            field.sanitize(&before).chars().count()
        };

        let input = self.input_mut(field);
        input.set_value(stored);
        input.cursor = cursor.min(input.value().chars().count());
    }
}

fn contact_input(field: ContactField) -> TextInput {
    TextInput::new()
        .label(field.label())
        .placeholder(field.placeholder())
}

fn offset_index(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = index as isize + delta;
    moved.clamp(0, len as isize - 1) as usize
}

/// Render the booking dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(76, 86, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Book Your Visit ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(Line::from(" Esc: close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step labels
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Step counter
            Constraint::Length(1), // Spacer
            Constraint::Min(4),    // Step body
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    let state = &app.booking;
    render_progress(frame, state, chunks[0], chunks[1], chunks[2]);

    match state.step() {
        Step::ServiceSelection => render_services(frame, state, chunks[4]),
        Step::DateTime => render_date_time(frame, state, app.today, chunks[4]),
        Step::ContactInfo => render_contact(frame, state, chunks[4]),
        Step::Confirmation => render_confirmation(frame, state, &app.settings.date_format, chunks[4]),
    }

    render_buttons(frame, state, chunks[6]);
}

fn render_progress(frame: &mut Frame, state: &BookingDialogState, labels: Rect, gauge: Rect, counter: Rect) {
    let current = state.step();

    let mut spans = Vec::new();
    for (i, step) in Step::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let (marker, style) = if step.index() < current.index() {
            ("✓", Style::default().fg(Color::Green))
        } else if *step == current {
            (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{} {}", marker, step.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), labels);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(current.progress_percent())
        .label("");
    frame.render_widget(progress, gauge);

    let counter_line = Line::from(vec![
        Span::styled(
            format!("Step {} of {}", current.index() + 1, Step::ALL.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{}% complete", current.progress_percent()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(counter_line), counter);
}

fn render_services(frame: &mut Frame, state: &BookingDialogState, area: Rect) {
    let selected = state.wizard.state().selected_service.as_ref();
    let title_width = state
        .wizard
        .catalog()
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = state
        .wizard
        .catalog()
        .iter()
        .map(|entry| {
            let is_selected = selected == Some(&entry.id);
            let mark = if is_selected { "[✓]" } else { "[ ]" };
            let style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), style),
                Span::styled(format!("{:<width$}", entry.title, width = title_width), style),
                Span::raw("  "),
                Span::styled(entry.price.as_str(), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Choose a service ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.service_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_date_time(frame: &mut Frame, state: &BookingDialogState, today: NaiveDate, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CalendarWidget::WIDTH + 4),
            Constraint::Min(20),
        ])
        .split(area);

    let calendar_focused = state.date_time_focus == DateTimeFocus::Calendar;
    let calendar_block = Block::default()
        .title(" Pick a date ")
        .borders(Borders::ALL)
        .border_style(focus_border(calendar_focused));
    let calendar_area = calendar_block.inner(columns[0]);
    frame.render_widget(calendar_block, columns[0]);

    let calendar = CalendarWidget::new(
        state.calendar_month,
        state.wizard.policy(),
        today,
        state.calendar_cursor,
    )
    .selected(state.wizard.state().selected_date)
    .focused(calendar_focused);
    frame.render_widget(
        calendar,
        Rect {
            x: calendar_area.x + 1,
            ..calendar_area
        },
    );

    let slots_focused = state.date_time_focus == DateTimeFocus::Slots;
    let slots_block = Block::default()
        .title(" Available times ")
        .borders(Borders::ALL)
        .border_style(focus_border(slots_focused));

    let Some(date) = state.wizard.state().selected_date else {
        let hint = Paragraph::new("Pick a date to see available times.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(slots_block);
        frame.render_widget(hint, columns[1]);
        return;
    };

    let selected_time = state.wizard.state().selected_time.as_deref();
    let mut lines = vec![
        Line::from(Span::styled(
            date.format("%A, %B %-d").to_string(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ];
    let labels: Vec<&str> = state.wizard.slots().iter().collect();
    for (row, chunk) in labels.chunks(SLOT_COLUMNS).enumerate() {
        let mut spans = Vec::new();
        for (col, label) in chunk.iter().enumerate() {
            let index = row * SLOT_COLUMNS + col;
            let mut style = if Some(*label) == selected_time {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            if slots_focused && index == state.slot_index {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {:>8} ", label), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(slots_block), columns[1]);
}

fn render_contact(frame: &mut Frame, state: &BookingDialogState, area: Rect) {
    let fields = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Notes,
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(area);

    for (field, row) in fields.iter().zip(rows.iter()) {
        let input = state.input(*field);
        let count = input.value().chars().count();
        let counter = format!(" {}/{}", count, field.max_len());

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(counter.len() as u16)])
            .split(*row);

        frame.render_widget(input, cols[0]);
        frame.render_widget(
            Paragraph::new(counter).style(Style::default().fg(Color::DarkGray)),
            cols[1],
        );
    }

    if let Some(reason) = state.wizard.incomplete_reason() {
        frame.render_widget(
            Paragraph::new(format!("To continue: {}", reason))
                .style(Style::default().fg(Color::DarkGray)),
            rows[4],
        );
    }
}

fn render_confirmation(frame: &mut Frame, state: &BookingDialogState, date_format: &str, area: Rect) {
    let block = Block::default()
        .title(" Review your booking ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(summary) = state.wizard.preview() else {
        frame.render_widget(
            Paragraph::new("Some details are missing. Go back to complete them.").block(block),
            area,
        );
        return;
    };

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(Color::Cyan)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let contact = &summary.contact;
    let mut lines = vec![
        row(
            "Service",
            format!("{} ({})", summary.service.title, summary.service.price),
        ),
        row("Date", summary.date.format(date_format).to_string()),
        row("Time", summary.time.clone()),
        Line::from(""),
        row("Name", contact.name().to_string()),
        row("Phone", contact.phone().to_string()),
        row("Email", contact.email().to_string()),
    ];
    if let Some(notes) = contact.notes() {
        lines.push(row("Notes", notes.to_string()));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_buttons(frame: &mut Frame, state: &BookingDialogState, area: Rect) {
    let step = state.step();
    let mut spans = Vec::new();

    if !step.is_first() {
        spans.push(Span::styled("[Ctrl+B]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Back    "));
    }

    let enabled = state.wizard.can_advance() && !state.closing;
    let action = if state.closing {
        "Booked!"
    } else if step.is_last() {
        "Confirm Booking"
    } else {
        "Continue"
    };
    let style = if enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled("[Enter]", style));
    spans.push(Span::styled(format!(" {}", action), style));

    let hint = match step {
        Step::ServiceSelection => "  ↑/↓ move  Space select",
        Step::DateTime => "  arrows move  PgUp/PgDn month  Tab times  Space select",
        Step::ContactInfo => "  Tab next field",
        Step::Confirmation => "",
    };
    spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle a key while the booking dialog is open
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if app.booking.closing {
        return;
    }

    if key.code == KeyCode::Esc {
        app.close_booking(now);
        return;
    }

    if key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.booking.wizard.back();
        return;
    }

    match app.booking.step() {
        Step::ServiceSelection => handle_service_key(app, key),
        Step::DateTime => handle_date_time_key(app, key),
        Step::ContactInfo => handle_contact_key(app, key),
        Step::Confirmation => match key.code {
            KeyCode::Enter => {
                app.submit_booking(now);
            }
            KeyCode::Backspace => {
                app.booking.wizard.back();
            }
            _ => {}
        },
    }
}

/// Continue if the current step is complete; otherwise the button is inert
fn advance(app: &mut App) {
    let state = &mut app.booking;
    if !state.wizard.can_advance() {
        return;
    }
    if state.wizard.next() == Step::DateTime {
        state.date_time_focus = DateTimeFocus::Calendar;
    }
    app.clear_status();
}

fn handle_service_key(app: &mut App, key: KeyEvent) {
    let state = &mut app.booking;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_service(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_service(1),
        KeyCode::Home | KeyCode::Char('g') => state.service_index = 0,
        KeyCode::End | KeyCode::Char('G') => {
            state.service_index = state.wizard.catalog().len().saturating_sub(1)
        }
        KeyCode::Char(' ') => {
            state.choose_highlighted_service();
        }
        KeyCode::Enter => {
            if state.choose_highlighted_service() {
                advance(app);
            }
        }
        _ => {}
    }
}

fn handle_date_time_key(app: &mut App, key: KeyEvent) {
    let today = app.today;
    let state = &mut app.booking;

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            state.toggle_date_time_focus();
            return;
        }
        KeyCode::PageUp => {
            state.change_month(false, today);
            return;
        }
        KeyCode::PageDown => {
            state.change_month(true, today);
            return;
        }
        KeyCode::Backspace => {
            state.wizard.back();
            return;
        }
        _ => {}
    }

    match state.date_time_focus {
        DateTimeFocus::Calendar => match key.code {
            KeyCode::Left | KeyCode::Char('h') => state.move_cursor_days(-1, today),
            KeyCode::Right | KeyCode::Char('l') => state.move_cursor_days(1, today),
            KeyCode::Up | KeyCode::Char('k') => state.move_cursor_days(-7, today),
            KeyCode::Down | KeyCode::Char('j') => state.move_cursor_days(7, today),
            KeyCode::Char(' ') => {
                state.choose_cursor_date(today);
            }
            KeyCode::Enter => {
                if state.choose_cursor_date(today) {
                    state.date_time_focus = DateTimeFocus::Slots;
                }
            }
            _ => {}
        },
        DateTimeFocus::Slots => match key.code {
            KeyCode::Left | KeyCode::Char('h') => state.move_slot(-1),
            KeyCode::Right | KeyCode::Char('l') => state.move_slot(1),
            KeyCode::Up | KeyCode::Char('k') => state.move_slot(-(SLOT_COLUMNS as isize)),
            KeyCode::Down | KeyCode::Char('j') => state.move_slot(SLOT_COLUMNS as isize),
            KeyCode::Char(' ') => {
                state.choose_highlighted_slot();
            }
            KeyCode::Enter => {
                if state.choose_highlighted_slot() {
                    advance(app);
                }
            }
            _ => {}
        },
    }
}

fn handle_contact_key(app: &mut App, key: KeyEvent) {
    let state = &mut app.booking;
    match key.code {
        KeyCode::Tab | KeyCode::Down => state.next_field(),
        KeyCode::BackTab | KeyCode::Up => state.prev_field(),
        KeyCode::Enter => advance(app),
        KeyCode::Backspace => state.edit_focused(TextInput::backspace),
        KeyCode::Delete => state.edit_focused(TextInput::delete),
        KeyCode::Left => state.edit_focused(TextInput::move_left),
        KeyCode::Right => state.edit_focused(TextInput::move_right),
        KeyCode::Home => state.edit_focused(TextInput::move_start),
        KeyCode::End => state.edit_focused(TextInput::move_end),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.edit_focused(|input| input.insert(c));
        }
        _ => {}
    }
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use chrono::Weekday;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn dialog() -> BookingDialogState {
        let settings = Settings {
            closed_weekday: Weekday::Sun,
            ..Settings::default()
        };
        BookingDialogState::new(BookingWizard::from_settings(&settings), date(10, 16))
    }

    #[test]
    fn test_service_highlight_is_clamped() {
        let mut d = dialog();
        d.move_service(-1);
        assert_eq!(d.service_index, 0);
        d.move_service(100);
        assert_eq!(d.service_index, 5);
        assert!(d.choose_highlighted_service());
        assert_eq!(
            d.wizard.state().selected_service.as_ref().map(|id| id.as_str()),
            Some("emergency")
        );
    }

    #[test]
    fn test_cursor_cannot_select_disabled_days() {
        let today = date(10, 16);
        let mut d = dialog();
        assert_eq!(d.calendar_cursor, today);

        // Sunday the 18th
        d.move_cursor_days(2, today);
        assert!(!d.choose_cursor_date(today));
        assert_eq!(d.wizard.state().selected_date, None);

        // yesterday
        d.move_cursor_days(-3, today);
        assert_eq!(d.calendar_cursor, date(10, 15));
        assert!(!d.choose_cursor_date(today));

        d.move_cursor_days(6, today);
        assert!(d.choose_cursor_date(today));
        assert_eq!(d.wizard.state().selected_date, Some(date(10, 21)));
    }

    #[test]
    fn test_month_navigation_stops_at_current_month() {
        let today = date(10, 16);
        let mut d = dialog();
        d.change_month(false, today);
        assert_eq!(d.calendar_month.first_day(), date(10, 1));

        d.change_month(true, today);
        assert_eq!(d.calendar_month.first_day(), date(11, 1));
        // November 1st 2026 is a Sunday
        assert_eq!(d.calendar_cursor, date(11, 2));
    }

    #[test]
    fn test_slots_focus_requires_date() {
        let today = date(10, 16);
        let mut d = dialog();
        d.toggle_date_time_focus();
        assert_eq!(d.date_time_focus, DateTimeFocus::Calendar);

        d.choose_cursor_date(today);
        d.toggle_date_time_focus();
        assert_eq!(d.date_time_focus, DateTimeFocus::Slots);
        d.move_slot(SLOT_COLUMNS as isize);
        assert!(d.choose_highlighted_slot());
        assert_eq!(d.wizard.state().selected_time.as_deref(), Some("10:00 AM"));
    }

    #[test]
    fn test_typing_is_sanitized() {
        let mut d = dialog();
        d.next_field();
        assert_eq!(d.contact_field, ContactField::Phone);
        for c in "555-CALL-1234".chars() {
            d.edit_focused(|input| input.insert(c));
        }
        assert_eq!(d.phone_input.value(), "555--1234");
        assert_eq!(d.wizard.state().contact.phone(), "555--1234");
    }

    #[test]
    fn test_rejected_char_keeps_cursor_in_place() {
        let mut d = dialog();
        d.next_field();
        for c in "5551234".chars() {
            d.edit_focused(|input| input.insert(c));
        }
        for _ in 0..4 {
            d.edit_focused(TextInput::move_left);
        }
        assert_eq!(d.phone_input.cursor, 3);

        d.edit_focused(|input| input.insert('x'));
        assert_eq!(d.phone_input.cursor, 3);
        d.edit_focused(|input| input.insert('9'));
        assert_eq!(d.phone_input.value(), "55591234");
        assert_eq!(d.phone_input.cursor, 4);
    }

    #[test]
    fn test_insert_at_limit_advances_cursor() {
        let mut d = dialog();
        let full = "a".repeat(ContactField::Name.max_len());
        d.edit_focused(|input| input.set_value(full.as_str()));
        d.edit_focused(TextInput::move_start);
        d.edit_focused(|input| input.insert('J'));
        d.edit_focused(|input| input.insert('o'));

        let value = d.name_input.value();
        assert_eq!(value.chars().count(), ContactField::Name.max_len());
        assert!(value.starts_with("Jo"));
        assert_eq!(d.name_input.cursor, 2);
    }

    #[test]
    fn test_reset_clears_inputs() {
        let mut d = dialog();
        for c in "Jane".chars() {
            d.edit_focused(|input| input.insert(c));
        }
        d.reset(date(10, 16));
        assert!(d.name_input.value().is_empty());
        assert!(d.wizard.state().is_pristine());
    }
    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_keyboard_booking_flow() {
        let settings = Settings::default();
        let today = date(10, 16);
        let mut app = App::new(&settings, today);
        app.open_booking();
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Down), now);
        handle_key(&mut app, key(KeyCode::Down), now);
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.booking.step(), Step::DateTime);

        for _ in 0..5 {
            handle_key(&mut app, key(KeyCode::Right), now);
        }
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.booking.date_time_focus, DateTimeFocus::Slots);
        handle_key(&mut app, key(KeyCode::Down), now);
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.booking.step(), Step::ContactInfo);

        type_text(&mut app, "Jane Doe", now);
        handle_key(&mut app, key(KeyCode::Tab), now);
        type_text(&mut app, "555-123-4567", now);
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.booking.step(), Step::ContactInfo);

        handle_key(&mut app, key(KeyCode::Tab), now);
        type_text(&mut app, "jane@x.com", now);
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.booking.step(), Step::Confirmation);

        let preview = app.booking.wizard.preview().unwrap();
        assert_eq!(preview.service.id.as_str(), "whitening");
        assert_eq!(preview.date, date(10, 21));
        assert_eq!(preview.time, "10:00 AM");

        handle_key(&mut app, key(KeyCode::Enter), now);
        assert!(app.booking.closing);
        assert!(app.celebration.is_some());

        // Input is ignored while the dialog closes
        handle_key(&mut app, key(KeyCode::Esc), now);
        assert!(app.has_dialog());
    }

    #[test]
    fn test_back_keeps_selections() {
        let settings = Settings::default();
        let today = date(10, 16);
        let mut app = App::new(&settings, today);
        app.open_booking();
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.booking.step(), Step::DateTime);

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL), now);
        assert_eq!(app.booking.step(), Step::ServiceSelection);
        assert_eq!(
            app.booking.wizard.state().selected_service.as_ref().map(|id| id.as_str()),
            Some("cosmetic")
        );
    }

    #[test]
    fn test_escape_closes_and_discards() {
        let settings = Settings::default();
        let mut app = App::new(&settings, date(10, 16));
        app.open_booking();
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Enter), now);

        handle_key(&mut app, key(KeyCode::Esc), now);
        assert!(!app.has_dialog());
        assert!(app.booking.wizard.state().is_pristine());
    }
}
