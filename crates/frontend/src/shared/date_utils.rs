/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::NaiveDate;

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.get(..5).unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Optional wire date for display; "-" when absent
pub fn format_optional_date(date_str: Option<&str>) -> String {
    date_str
        .filter(|s| !s.is_empty())
        .map(format_date)
        .unwrap_or_else(|| "-".to_string())
}

/// "Friday, 15 March 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Current local date from the browser clock.
pub fn today_local() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_optional_date() {
        assert_eq!(format_optional_date(None), "-");
        assert_eq!(format_optional_date(Some("")), "-");
        assert_eq!(format_optional_date(Some("2024-03-10")), "10.03.2024");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_long_date(date), "Friday, 15 March 2024");
    }
}
