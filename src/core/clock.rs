//! Source of "today" for date resolution.
//!
//! The parser never reads the system clock directly; it asks a [`Clock`]
//! once per call so that every pass resolves against the same day.

use chrono::{Local, NaiveDate};

/// Provides the current local date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The date that relative expressions resolve against.
    fn today(&self) -> NaiveDate;
}

/// Reads the local date from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_matches_local() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn test_clock_by_reference() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let clock = FixedClock(date);
        let by_ref = &clock;
        assert_eq!(by_ref.today(), date);
    }
}
