//! Calendar grid for the assembly schedule.
//!
//! Weeks always start on Monday. A month grid has a fixed 6x7 shape so the
//! layout does not jump between months.

use chrono::{Datelike, Duration, NaiveDate};

use crate::shared::date_key::format_date_key;

pub const MONTH_GRID_LEN: usize = 42;
pub const WEEK_GRID_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarViewMode {
    #[default]
    Month,
    Week,
}

impl CalendarViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarViewMode::Month => "month",
            CalendarViewMode::Week => "week",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "week" => CalendarViewMode::Week,
            _ => CalendarViewMode::Month,
        }
    }
}

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// `false` for leading/trailing days of the neighbouring months
    pub is_current_month: bool,
}

impl CalendarDay {
    pub fn key(&self) -> String {
        format_date_key(self.date)
    }

    /// Saturday and Sunday (columns 5 and 6)
    pub fn is_weekend(&self) -> bool {
        self.date.weekday().num_days_from_monday() >= 5
    }
}

/// Build the grid for `reference` in the given mode.
///
/// Month: 42 days starting from the Monday on or before the 1st.
/// Week: the Monday..Sunday week containing `reference`, all flagged current.
pub fn build_grid(reference: NaiveDate, mode: CalendarViewMode) -> Vec<CalendarDay> {
    match mode {
        CalendarViewMode::Month => {
            let first = first_day_of_month(reference.year(), reference.month());
            let grid_start = start_of_week(first);
            (0..MONTH_GRID_LEN as i64)
                .map(|offset| {
                    let date = add_days(grid_start, offset);
                    CalendarDay {
                        date,
                        is_current_month: date.year() == reference.year()
                            && date.month() == reference.month(),
                    }
                })
                .collect()
        }
        CalendarViewMode::Week => {
            let monday = start_of_week(reference);
            (0..WEEK_GRID_LEN as i64)
                .map(|offset| CalendarDay {
                    date: add_days(monday, offset),
                    is_current_month: true,
                })
                .collect()
        }
    }
}

/// Move the reference date by `step` periods: months in month mode
/// (day clamped to the target month), weeks in week mode.
pub fn shift_period(reference: NaiveDate, mode: CalendarViewMode, step: i32) -> NaiveDate {
    match mode {
        CalendarViewMode::Month => shift_months(reference, step),
        CalendarViewMode::Week => add_days(reference, step as i64 * 7),
    }
}

/// Monday-first weekday captions
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Caption of the visible period, e.g. `March 2024` or `04.03 - 10.03.2024`.
pub fn period_title(reference: NaiveDate, mode: CalendarViewMode) -> String {
    match mode {
        CalendarViewMode::Month => reference.format("%B %Y").to_string(),
        CalendarViewMode::Week => {
            let monday = start_of_week(reference);
            let sunday = add_days(monday, 6);
            format!("{} - {}", monday.format("%d.%m"), sunday.format("%d.%m.%Y"))
        }
    }
}

fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    };
    let last = add_days(first_day_of_month(next_year, next_month), -1);
    last.day()
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

fn start_of_week(day: NaiveDate) -> NaiveDate {
    let diff = day.weekday().num_days_from_monday() as i64;
    add_days(day, -diff)
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_grid_sizes() {
        let mut day = d(2024, 1, 1);
        while day.year() == 2024 {
            assert_eq!(build_grid(day, CalendarViewMode::Month).len(), MONTH_GRID_LEN);
            assert_eq!(build_grid(day, CalendarViewMode::Week).len(), WEEK_GRID_LEN);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_grid_starts_on_monday_for_whole_year() {
        let mut day = d(2025, 1, 1);
        while day.year() == 2025 {
            for mode in [CalendarViewMode::Month, CalendarViewMode::Week] {
                let grid = build_grid(day, mode);
                assert_eq!(grid[0].date.weekday(), Weekday::Mon, "{} {:?}", day, mode);
                assert_eq!(grid.last().unwrap().date.weekday(), Weekday::Sun);
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_march_2024_month_grid() {
        let grid = build_grid(d(2024, 3, 1), CalendarViewMode::Month);
        assert_eq!(grid.first().unwrap().date, d(2024, 2, 26));
        assert_eq!(grid.last().unwrap().date, d(2024, 4, 7));

        let leading: Vec<_> = grid.iter().take_while(|c| !c.is_current_month).collect();
        assert_eq!(leading.len(), 4);
        assert_eq!(grid.iter().filter(|c| c.is_current_month).count(), 31);
        assert!(!grid[41].is_current_month);
        // dates are consecutive
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_month_starting_on_sunday_has_six_leading_days() {
        // 2024-09-01 is a Sunday
        let grid = build_grid(d(2024, 9, 15), CalendarViewMode::Month);
        assert_eq!(grid[0].date, d(2024, 8, 26));
        assert_eq!(grid.iter().take_while(|c| !c.is_current_month).count(), 6);
        assert_eq!(grid[6].date, d(2024, 9, 1));
    }

    #[test]
    fn test_month_starting_on_monday_has_no_leading_days() {
        // 2024-07-01 is a Monday
        let grid = build_grid(d(2024, 7, 31), CalendarViewMode::Month);
        assert_eq!(grid[0].date, d(2024, 7, 1));
        assert!(grid[0].is_current_month);
        assert_eq!(grid[41].date, d(2024, 8, 11));
    }

    #[test]
    fn test_week_grid_contains_reference() {
        // Sunday belongs to the week that started six days earlier
        let grid = build_grid(d(2024, 3, 10), CalendarViewMode::Week);
        assert_eq!(grid[0].date, d(2024, 3, 4));
        assert_eq!(grid[6].date, d(2024, 3, 10));
        assert!(grid.iter().all(|c| c.is_current_month));

        // week crossing a month boundary is still all current
        let grid = build_grid(d(2024, 3, 1), CalendarViewMode::Week);
        assert_eq!(grid[0].date, d(2024, 2, 26));
        assert!(grid.iter().all(|c| c.is_current_month));
    }

    #[test]
    fn test_weekend_and_key() {
        let grid = build_grid(d(2024, 3, 4), CalendarViewMode::Week);
        let weekend: Vec<bool> = grid.iter().map(|c| c.is_weekend()).collect();
        assert_eq!(weekend, vec![false, false, false, false, false, true, true]);
        assert_eq!(grid[0].key(), "2024-03-04");
    }

    #[test]
    fn test_shift_period() {
        use CalendarViewMode::*;
        assert_eq!(shift_period(d(2024, 3, 15), Month, 1), d(2024, 4, 15));
        assert_eq!(shift_period(d(2024, 1, 31), Month, 1), d(2024, 2, 29));
        assert_eq!(shift_period(d(2023, 3, 31), Month, -1), d(2023, 2, 28));
        assert_eq!(shift_period(d(2024, 1, 10), Month, -1), d(2023, 12, 10));
        assert_eq!(shift_period(d(2024, 12, 10), Month, 1), d(2025, 1, 10));
        assert_eq!(shift_period(d(2024, 3, 1), Week, -1), d(2024, 2, 23));
        assert_eq!(shift_period(d(2024, 3, 1), Week, 2), d(2024, 3, 15));
    }

    #[test]
    fn test_period_title() {
        assert_eq!(period_title(d(2024, 3, 15), CalendarViewMode::Month), "March 2024");
        assert_eq!(
            period_title(d(2024, 3, 6), CalendarViewMode::Week),
            "04.03 - 10.03.2024"
        );
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!(CalendarViewMode::parse("week"), CalendarViewMode::Week);
        assert_eq!(CalendarViewMode::parse("month"), CalendarViewMode::Month);
        assert_eq!(CalendarViewMode::parse(""), CalendarViewMode::Month);
    }
}
