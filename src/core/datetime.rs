//! Calendar arithmetic used by the natural language passes.
//!
//! Every function takes "today" explicitly and returns `None` instead of
//! panicking when the requested date does not exist.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, Weekday};

/// Meridiem marker on a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// After noon.
    Pm,
}

impl Meridiem {
    /// Parse `am`/`pm` in any case.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            _ => None,
        }
    }
}

/// Build a time from an hour, minute and optional meridiem.
///
/// With a meridiem, `pm` adds twelve hours unless the hour is already 12 and
/// `am` maps 12 to midnight. Without one the hour is taken literally.
/// Returns `None` for values that do not form a valid time of day, including
/// meridiem hours above 12.
#[must_use]
pub fn clock_time(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> Option<NaiveTime> {
    let hour = match meridiem {
        Some(_) if hour > 12 => return None,
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Shift a date by a signed number of days.
#[must_use]
pub fn offset_days(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        today.checked_add_days(magnitude)
    } else {
        today.checked_sub_days(magnitude)
    }
}

/// Next occurrence of `weekday` strictly after `today`.
///
/// If today is that weekday, the result is one week later.
#[must_use]
pub fn next_weekday(today: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = today.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let ahead = match (7 + target - current) % 7 {
        0 => 7,
        n => n,
    };
    today.checked_add_days(Days::new(u64::from(ahead)))
}

/// First day of the calendar month after `today`.
#[must_use]
pub fn first_of_next_month(today: NaiveDate) -> Option<NaiveDate> {
    today
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
}

/// Last day of the calendar month containing `today`.
#[must_use]
pub fn last_of_month(today: NaiveDate) -> Option<NaiveDate> {
    first_of_next_month(today).and_then(|d| d.pred_opt())
}

/// Resolve a numeric `month/day[/year]` date.
///
/// The year defaults to today's year; two-digit years are read as 20xx.
#[must_use]
pub fn numeric_date(today: NaiveDate, month: u32, day: u32, year: Option<i32>) -> Option<NaiveDate> {
    let year = match year {
        Some(y) if y < 100 => 2000 + y,
        Some(y) => y,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolve a `month day` date in the current year, rolling to next year if
/// it has already passed.
#[must_use]
pub fn upcoming_month_day(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(date) if date >= today => Some(date),
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}

/// Parse a weekday name in any case.
#[must_use]
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse a month name or three/four-letter abbreviation (1-based).
#[must_use]
pub fn month_from_name(name: &str) -> Option<u32> {
    match name.to_ascii_lowercase().as_str() {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sept" | "sep" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

/// Parse a `YYYY-MM-DD` date.
#[must_use]
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn test_clock_time_meridiem() {
        assert_eq!(clock_time(2, 0, Some(Meridiem::Pm)), time(14, 0));
        assert_eq!(clock_time(12, 0, Some(Meridiem::Pm)), time(12, 0));
        assert_eq!(clock_time(12, 30, Some(Meridiem::Am)), time(0, 30));
        assert_eq!(clock_time(9, 15, Some(Meridiem::Am)), time(9, 15));
    }

    #[test]
    fn test_clock_time_literal() {
        assert_eq!(clock_time(14, 0, None), time(14, 0));
        assert_eq!(clock_time(3, 0, None), time(3, 0));
    }

    #[test]
    fn test_clock_time_out_of_range() {
        assert_eq!(clock_time(25, 0, None), None);
        assert_eq!(clock_time(13, 0, Some(Meridiem::Pm)), None);
        assert_eq!(clock_time(10, 75, None), None);
    }

    #[test]
    fn test_offset_days() {
        let today = date(2024, 3, 1);
        assert_eq!(offset_days(today, 1), Some(date(2024, 3, 2)));
        assert_eq!(offset_days(today, -1), Some(date(2024, 2, 29)));
        assert_eq!(offset_days(today, 0), Some(today));
    }

    #[test]
    fn test_next_weekday_strictly_after() {
        // 2024-03-15 is a Friday
        let friday = date(2024, 3, 15);
        assert_eq!(next_weekday(friday, Weekday::Fri), Some(date(2024, 3, 22)));
        assert_eq!(next_weekday(friday, Weekday::Sat), Some(date(2024, 3, 16)));
        assert_eq!(next_weekday(friday, Weekday::Mon), Some(date(2024, 3, 18)));
        assert_eq!(next_weekday(friday, Weekday::Thu), Some(date(2024, 3, 21)));
    }

    #[test]
    fn test_first_of_next_month() {
        assert_eq!(first_of_next_month(date(2024, 1, 31)), Some(date(2024, 2, 1)));
        assert_eq!(first_of_next_month(date(2024, 12, 15)), Some(date(2025, 1, 1)));
    }

    #[test]
    fn test_last_of_month() {
        assert_eq!(last_of_month(date(2024, 2, 10)), Some(date(2024, 2, 29)));
        assert_eq!(last_of_month(date(2023, 12, 1)), Some(date(2023, 12, 31)));
    }

    #[test]
    fn test_numeric_date() {
        let today = date(2024, 6, 1);
        assert_eq!(numeric_date(today, 12, 25, None), Some(date(2024, 12, 25)));
        assert_eq!(numeric_date(today, 1, 5, Some(25)), Some(date(2025, 1, 5)));
        assert_eq!(numeric_date(today, 1, 5, Some(2026)), Some(date(2026, 1, 5)));
        assert_eq!(numeric_date(today, 2, 30, None), None);
        assert_eq!(numeric_date(today, 13, 1, None), None);
    }

    #[test]
    fn test_upcoming_month_day() {
        let today = date(2024, 6, 15);
        assert_eq!(upcoming_month_day(today, 6, 15), Some(date(2024, 6, 15)));
        assert_eq!(upcoming_month_day(today, 12, 25), Some(date(2024, 12, 25)));
        assert_eq!(upcoming_month_day(today, 3, 1), Some(date(2025, 3, 1)));
        assert_eq!(upcoming_month_day(today, 4, 31), None);
    }

    #[test]
    fn test_upcoming_leap_day() {
        // Feb 29 has passed in 2024 and 2025 has none
        assert_eq!(upcoming_month_day(date(2024, 6, 15), 2, 29), None);
        assert_eq!(upcoming_month_day(date(2024, 1, 15), 2, 29), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_names() {
        assert_eq!(weekday_from_name("Friday"), Some(Weekday::Fri));
        assert_eq!(weekday_from_name("fri"), None);
        assert_eq!(month_from_name("DEC"), Some(12));
        assert_eq!(month_from_name("September"), Some(9));
        assert_eq!(month_from_name("smarch"), None);
        assert_eq!(Meridiem::from_str_loose("PM"), Some(Meridiem::Pm));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-12-15"), Some(date(2024, 12, 15)));
        assert_eq!(parse_iso_date("12/15/2024"), None);
    }
}
