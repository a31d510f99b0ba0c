//! Which calendar days can be booked
//!
//! A day is bookable when it is not before today and does not fall on the
//! clinic's closed weekday. The calendar uses the same policy to render
//! days disabled that the wizard uses to refuse them.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Why a day can or cannot be picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAvailability {
    Open,
    Past,
    Closed,
}

impl DayAvailability {
    pub fn is_open(self) -> bool {
        self == DayAvailability::Open
    }
}

/// Date selection rules for one clinic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePolicy {
    closed_weekday: Weekday,
}

impl DatePolicy {
    pub fn new(closed_weekday: Weekday) -> Self {
        Self { closed_weekday }
    }

    pub fn closed_weekday(&self) -> Weekday {
        self.closed_weekday
    }

    pub fn availability(&self, date: NaiveDate, today: NaiveDate) -> DayAvailability {
        if date < today {
            DayAvailability::Past
        } else if date.weekday() == self.closed_weekday {
            DayAvailability::Closed
        } else {
            DayAvailability::Open
        }
    }

    pub fn is_selectable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.availability(date, today).is_open()
    }

    /// The first bookable day on or after `from` (never before `today`)
    pub fn first_selectable(&self, from: NaiveDate, today: NaiveDate) -> NaiveDate {
        let start = from.max(today);
        if start.weekday() == self.closed_weekday {
            start + Days::new(1)
        } else {
            start
        }
    }
}

impl Default for DatePolicy {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

/// A calendar month, laid out Sunday-first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    /// Parse a `YYYY-MM` month
    pub fn parse(month: &str) -> Option<Self> {
        NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
            .ok()
            .map(Self::containing)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Days::new(u64::from(self.days_in_month() - 1))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last_day()
    }

    pub fn days_in_month(&self) -> u32 {
        let year = self.first.year();
        match self.first.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                    29
                } else {
                    28
                }
            }
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self.first + Days::new(u64::from(self.days_in_month())),
        }
    }

    pub fn prev(&self) -> Self {
        Self::containing(self.first - Days::new(1))
    }

    /// Header text, e.g. "October 2026"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Rows of seven cells, Sunday first; cells outside the month are `None`
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let lead = self.first.weekday().num_days_from_sunday() as usize;
        let mut weeks = Vec::new();
        let mut row = [None; 7];
        let mut col = lead;

        for offset in 0..self.days_in_month() {
            row[col] = Some(self.first + Days::new(u64::from(offset)));
            col += 1;
            if col == 7 {
                weeks.push(row);
                row = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(row);
        }

        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_past_and_closed_days() {
        let policy = DatePolicy::default();
        // 2026-10-16 is a Friday
        let today = date(2026, 10, 16);

        assert_eq!(policy.availability(date(2026, 10, 15), today), DayAvailability::Past);
        assert_eq!(policy.availability(date(2026, 10, 18), today), DayAvailability::Closed);
        assert_eq!(policy.availability(date(2026, 10, 21), today), DayAvailability::Open);
        assert!(policy.is_selectable(today, today));
    }

    #[test]
    fn test_first_selectable_skips_closed_day() {
        let policy = DatePolicy::default();
        let today = date(2026, 10, 16);
        assert_eq!(policy.first_selectable(date(2026, 10, 1), today), today);
        assert_eq!(
            policy.first_selectable(date(2026, 10, 18), today),
            date(2026, 10, 19)
        );
    }

    #[test]
    fn test_month_layout() {
        // October 2026 starts on a Thursday
        let month = MonthView::containing(date(2026, 10, 16));
        assert_eq!(month.first_day(), date(2026, 10, 1));
        assert_eq!(month.days_in_month(), 31);
        assert_eq!(month.title(), "October 2026");

        let weeks = month.weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][3], None);
        assert_eq!(weeks[0][4], Some(date(2026, 10, 1)));
        assert_eq!(weeks[4][6], Some(date(2026, 10, 31)));
    }

    #[test]
    fn test_month_navigation() {
        let dec = MonthView::parse("2026-12").unwrap();
        assert_eq!(dec.next().first_day(), date(2027, 1, 1));
        assert_eq!(dec.prev().first_day(), date(2026, 11, 1));

        let feb = MonthView::parse("2028-02").unwrap();
        assert_eq!(feb.days_in_month(), 29);
        assert!(MonthView::parse("2026-13").is_none());
    }
}
