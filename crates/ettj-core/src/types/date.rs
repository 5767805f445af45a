//! Date type for calendar calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EttjError, EttjResult};

/// A calendar date.
///
/// A newtype wrapper around `chrono::NaiveDate` providing the operations
/// the expiry and day-count engine needs, with error-returning constructors.
///
/// # Example
///
/// ```rust
/// use ettj_core::types::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.to_string(), "2024-06-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `EttjError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> EttjResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| EttjError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `EttjError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> EttjResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| EttjError::invalid_date(format!("cannot parse '{s}' as YYYY-MM-DD")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Adds a number of days to the date (negative moves backward).
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the absolute distance from the given day-of-month.
    ///
    /// Used when picking the weekday occurrence nearest a pivot day.
    #[must_use]
    pub fn distance_from_day(&self, day: u32) -> u32 {
        self.day().abs_diff(day)
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}
