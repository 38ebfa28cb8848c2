//! Date keys: планируемые даты хранятся как `YYYY-MM-DD`,
//! backend иногда присылает полный timestamp, время отбрасывается.

use chrono::NaiveDate;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parse the date part (first 10 characters) of an ISO date or timestamp.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    let head = value.trim().get(..10)?;
    NaiveDate::parse_from_str(head, DATE_KEY_FORMAT).ok()
}

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Signed number of days from `today` to `date_str`; 0 when the date is absent or invalid.
pub fn days_until(date_str: Option<&str>, today: NaiveDate) -> i64 {
    date_str
        .and_then(parse_date_key)
        .map(|target| (target - today).num_days())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_plain_and_timestamp() {
        assert_eq!(parse_date_key("2024-03-05"), Some(d(2024, 3, 5)));
        assert_eq!(parse_date_key("2024-03-05T23:59:59.000Z"), Some(d(2024, 3, 5)));
        assert_eq!(parse_date_key(" 2024-03-05 "), Some(d(2024, 3, 5)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date_key(""), None);
        assert_eq!(parse_date_key("2024-3-5"), None);
        assert_eq!(parse_date_key("2024-02-30"), None);
        assert_eq!(parse_date_key("tomorrow"), None);
    }

    #[test]
    fn test_format_roundtrip_key() {
        assert_eq!(format_date_key(d(2024, 1, 9)), "2024-01-09");
    }

    #[test]
    fn test_days_until() {
        let today = d(2024, 3, 10);
        assert_eq!(days_until(Some("2024-03-15"), today), 5);
        assert_eq!(days_until(Some("2024-03-08T10:00:00"), today), -2);
        assert_eq!(days_until(None, today), 0);
        assert_eq!(days_until(Some("garbage"), today), 0);
    }
}
