//! Month calendar widget
//!
//! Renders a Sunday-first month grid. Days the [`DatePolicy`] rejects are
//! drawn dimmed; the handler never lets the cursor select them.

use chrono::{Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::wizard::{DatePolicy, MonthView};

const CELL_WIDTH: u16 = 4;
const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A month grid with cursor and selection highlighting
pub struct CalendarWidget<'a> {
    month: MonthView,
    policy: &'a DatePolicy,
    today: NaiveDate,
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
    focused: bool,
}

impl<'a> CalendarWidget<'a> {
    pub fn new(month: MonthView, policy: &'a DatePolicy, today: NaiveDate, cursor: NaiveDate) -> Self {
        Self {
            month,
            policy,
            today,
            cursor,
            selected: None,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: Option<NaiveDate>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows needed to draw `month`: title, weekday header and the weeks
    pub fn height(month: &MonthView) -> u16 {
        2 + month.weeks().len() as u16
    }

    pub const WIDTH: u16 = CELL_WIDTH * 7;

    fn day_style(&self, date: NaiveDate) -> Style {
        let mut style = if self.policy.is_selectable(date, self.today) {
            Style::default().fg(Color::White)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        };

        if date == self.today {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if Some(date) == self.selected {
            style = style
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
        }
        if self.focused && date == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl<'a> Widget for CalendarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let title_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let title = format!("< {} >", self.month.title());
        let title_x = area.x + (Self::WIDTH.min(area.width).saturating_sub(title.len() as u16)) / 2;
        buf.set_string(title_x, area.y, &title, title_style);

        if area.height < 2 {
            return;
        }
        let header: Vec<Span> = WEEKDAYS
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let closed = self.policy.closed_weekday().num_days_from_sunday() as usize == i;
                let style = if closed {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                Span::styled(format!("{:>3} ", d), style)
            })
            .collect();
        buf.set_line(area.x, area.y + 1, &Line::from(header), area.width);

        for (row, week) in self.month.weeks().iter().enumerate() {
            let y = area.y + 2 + row as u16;
            if y >= area.y + area.height {
                break;
            }
            for (col, cell) in week.iter().enumerate() {
                let Some(date) = cell else { continue };
                let x = area.x + col as u16 * CELL_WIDTH;
                if x + CELL_WIDTH > area.x + area.width {
                    break;
                }
                buf.set_string(x, y, format!("{:>3}", date.day()), self.day_style(*date));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_disabled_days_are_crossed_out() {
        let policy = DatePolicy::new(Weekday::Sun);
        let widget = CalendarWidget::new(MonthView::containing(date(16)), &policy, date(16), date(16));

        assert!(widget.day_style(date(15)).add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(widget.day_style(date(18)).add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!widget.day_style(date(21)).add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_renders_day_numbers() {
        let policy = DatePolicy::new(Weekday::Sun);
        let month = MonthView::containing(date(16));
        let area = Rect::new(0, 0, CalendarWidget::WIDTH, CalendarWidget::height(&month));
        let mut buf = Buffer::empty(area);

        CalendarWidget::new(month, &policy, date(16), date(16)).render(area, &mut buf);

        let title_row: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(title_row.contains("October 2026"));
        // October 1st 2026 is a Thursday: column 4, right-aligned in its cell
        assert_eq!(buf[(4 * CELL_WIDTH + 2, 2)].symbol(), "1");
    }
}
