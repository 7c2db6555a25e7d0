//! Time source used for note ids and creation dates.

use chrono::{Local, NaiveDate};

/// Provides the current instant and calendar date to the store.
pub trait Clock {
    /// Current time in Unix epoch milliseconds.
    fn now_millis(&self) -> i64;
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Frozen clock for deterministic callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: i64,
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(millis: i64, date: NaiveDate) -> Self {
        Self { millis, date }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Formats a creation date as abbreviated month, day, 4-digit year.
pub fn format_created_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::format_created_date;
    use chrono::NaiveDate;

    #[test]
    fn created_date_uses_short_month_and_unpadded_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        assert_eq!(format_created_date(date), "Jan 5, 2024");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).expect("valid date");
        assert_eq!(format_created_date(date), "Dec 25, 2023");
    }
}
