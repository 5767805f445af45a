//! The trading calendar: two ordered date sets over a fixed horizon.
//!
//! A [`TradingCalendar`] holds the business days of one financial center and
//! every calendar day over the horizon [1990-01-01, 2070-01-01). It is built
//! once and shared by reference; nothing mutates it after construction. All
//! queries derive fresh values from the two sorted vectors.

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EttjError, EttjResult};
use crate::types::Date;

pub mod b3;

/// First year covered by every calendar (inclusive).
pub const HORIZON_START_YEAR: i32 = 1990;
/// First year past the covered range (exclusive).
pub const HORIZON_END_YEAR: i32 = 2070;

/// An immutable trading calendar for one exchange.
///
/// Invariants established at construction: both date sets are sorted
/// ascending and deduplicated, `business_days` is a subset of `all_days`,
/// and `all_days` is exactly every day of the horizon.
///
/// # Example
///
/// ```rust
/// use ettj_core::calendar::TradingCalendar;
/// use ettj_core::types::Date;
///
/// let cal = TradingCalendar::b3();
/// // 2021-01-01 is Confraternização Universal
/// assert!(!cal.is_business_day(Date::from_ymd(2021, 1, 1).unwrap()));
/// assert!(cal.is_business_day(Date::from_ymd(2021, 1, 4).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct TradingCalendar {
    name: String,
    business_days: Vec<Date>,
    all_days: Vec<Date>,
}

impl TradingCalendar {
    /// Returns the first date of the horizon (inclusive).
    #[must_use]
    pub fn horizon_start() -> Date {
        Date::from_ymd(HORIZON_START_YEAR, 1, 1).expect("horizon start is a valid date")
    }

    /// Returns the first date past the horizon (exclusive).
    #[must_use]
    pub fn horizon_end() -> Date {
        Date::from_ymd(HORIZON_END_YEAR, 1, 1).expect("horizon end is a valid date")
    }

    /// Builds the B3 exchange calendar from the built-in holiday ruleset.
    #[must_use]
    pub fn b3() -> Self {
        Self::from_holidays("B3", b3::holidays())
    }

    /// Builds a calendar from a holiday list.
    ///
    /// Business days are all Monday-Friday dates of the horizon that are not
    /// in `holidays`. Holiday dates outside the horizon are ignored.
    pub fn from_holidays(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        let mut holidays: Vec<Date> = holidays.into_iter().collect();
        holidays.sort_unstable();
        holidays.dedup();

        let all_days = build_all_days();
        let business_days = all_days
            .iter()
            .filter(|d| !d.is_weekend() && holidays.binary_search(d).is_err())
            .copied()
            .collect();

        Self::finish(name.into(), business_days, all_days)
    }

    /// Wraps an externally sourced list of business-open dates.
    ///
    /// This is the seam for an injected calendar feed: the raw date list is
    /// sorted, deduplicated, and frozen once for the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns `EttjError::CalendarUnavailable` when the list is empty or
    /// contains a date outside the horizon.
    pub fn from_business_days(
        name: impl Into<String>,
        dates: impl IntoIterator<Item = Date>,
    ) -> EttjResult<Self> {
        let mut business_days: Vec<Date> = dates.into_iter().collect();
        business_days.sort_unstable();
        business_days.dedup();

        if business_days.is_empty() {
            return Err(EttjError::calendar_unavailable(
                "source produced no business days",
            ));
        }
        if let Some(outside) = business_days
            .iter()
            .find(|d| **d < Self::horizon_start() || **d >= Self::horizon_end())
        {
            return Err(EttjError::calendar_unavailable(format!(
                "business day {outside} is outside the horizon"
            )));
        }

        Ok(Self::finish(name.into(), business_days, build_all_days()))
    }

    /// Loads a calendar from JSON data in the [`CalendarData`] format.
    ///
    /// # Errors
    ///
    /// Returns `EttjError::CalendarUnavailable` on malformed JSON or an
    /// unparseable holiday date.
    pub fn from_json(json: &str) -> EttjResult<Self> {
        let data: CalendarData = serde_json::from_str(json).map_err(|e| {
            EttjError::calendar_unavailable(format!("failed to parse calendar JSON: {e}"))
        })?;
        data.build()
    }

    /// Loads a calendar from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `EttjError::CalendarUnavailable` when the file cannot be read
    /// or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> EttjResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            EttjError::calendar_unavailable(format!(
                "failed to read {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_json(&content)
    }

    fn finish(name: String, business_days: Vec<Date>, all_days: Vec<Date>) -> Self {
        info!(
            "loaded calendar '{}': {} business days over [{}, {})",
            name,
            business_days.len(),
            Self::horizon_start(),
            Self::horizon_end(),
        );
        Self {
            name,
            business_days,
            all_days,
        }
    }

    /// Returns the calendar name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sorted business days of the horizon.
    #[must_use]
    pub fn business_days(&self) -> &[Date] {
        &self.business_days
    }

    /// Returns every calendar day of the horizon.
    #[must_use]
    pub fn all_days(&self) -> &[Date] {
        &self.all_days
    }

    /// Checks whether a date falls inside the horizon.
    #[must_use]
    pub fn in_horizon(&self, date: Date) -> bool {
        date >= Self::horizon_start() && date < Self::horizon_end()
    }

    /// Checks whether the exchange is open on the given date.
    #[must_use]
    pub fn is_business_day(&self, date: Date) -> bool {
        self.business_days.binary_search(&date).is_ok()
    }

    /// Returns the business days of one month, in ascending order.
    #[must_use]
    pub fn business_days_in_month(&self, year: i32, month: u32) -> &[Date] {
        month_slice(&self.business_days, year, month)
    }

    /// Returns every day of one month within the horizon, in ascending order.
    #[must_use]
    pub fn calendar_days_in_month(&self, year: i32, month: u32) -> &[Date] {
        month_slice(&self.all_days, year, month)
    }

    /// Returns the earliest business day `>= date`, if any exists in the horizon.
    #[must_use]
    pub fn next_business_day_on_or_after(&self, date: Date) -> Option<Date> {
        let idx = self.business_days.partition_point(|d| *d < date);
        self.business_days.get(idx).copied()
    }

    /// Returns the earliest business day strictly after `date`.
    #[must_use]
    pub fn next_business_day_after(&self, date: Date) -> Option<Date> {
        let idx = self.business_days.partition_point(|d| *d <= date);
        self.business_days.get(idx).copied()
    }

    /// Returns the latest business day strictly before `date`.
    #[must_use]
    pub fn previous_business_day_before(&self, date: Date) -> Option<Date> {
        let idx = self.business_days.partition_point(|d| *d < date);
        idx.checked_sub(1).map(|i| self.business_days[i])
    }
}

/// Every day of the horizon, ascending.
fn build_all_days() -> Vec<Date> {
    let start = TradingCalendar::horizon_start();
    let len = start.days_between(&TradingCalendar::horizon_end());
    (0..len).map(|offset| start.add_days(offset)).collect()
}

/// The contiguous slice of `days` belonging to one month.
fn month_slice(days: &[Date], year: i32, month: u32) -> &[Date] {
    let lo = days.partition_point(|d| (d.year(), d.month()) < (year, month));
    let hi = days.partition_point(|d| (d.year(), d.month()) <= (year, month));
    &days[lo..hi]
}

/// Calendar data structure for JSON serialization.
///
/// # JSON Format
///
/// ```json
/// {
///   "name": "B3",
///   "holidays": ["2025-01-01", "2025-12-25"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarData {
    /// Name of the calendar.
    pub name: String,

    /// Holiday dates in YYYY-MM-DD format.
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl CalendarData {
    /// Builds the calendar, parsing every holiday date string.
    ///
    /// # Errors
    ///
    /// Returns `EttjError::CalendarUnavailable` on the first unparseable date.
    pub fn build(self) -> EttjResult<TradingCalendar> {
        let mut holidays = Vec::with_capacity(self.holidays.len());
        for raw in &self.holidays {
            let date = Date::parse(raw).map_err(|_| {
                EttjError::calendar_unavailable(format!("invalid holiday date '{raw}'"))
            })?;
            holidays.push(date);
        }
        Ok(TradingCalendar::from_holidays(self.name, holidays))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_all_days_cover_horizon() {
        let cal = TradingCalendar::from_holidays("empty", []);
        let all = cal.all_days();
        assert_eq!(all.first().copied(), Some(date(1990, 1, 1)));
        assert_eq!(all.last().copied(), Some(date(2069, 12, 31)));
        // 80 years with 20 leap days (1992..=2068 step 4, minus none: 2000 is a leap year)
        assert_eq!(all.len(), 80 * 365 + 20);
    }

    #[test]
    fn test_weekends_are_not_business_days() {
        let cal = TradingCalendar::from_holidays("empty", []);
        assert!(!cal.is_business_day(date(2024, 1, 6))); // Saturday
        assert!(!cal.is_business_day(date(2024, 1, 7))); // Sunday
        assert!(cal.is_business_day(date(2024, 1, 8))); // Monday
    }

    #[test]
    fn test_holidays_removed_from_business_days() {
        let cal = TradingCalendar::from_holidays("one", [date(2024, 1, 8)]);
        assert!(!cal.is_business_day(date(2024, 1, 8)));
        assert!(cal.is_business_day(date(2024, 1, 9)));
    }

    #[test]
    fn test_business_days_subset_of_all_days() {
        let cal = TradingCalendar::b3();
        for d in cal.business_days().iter().step_by(997) {
            assert!(cal.all_days().binary_search(d).is_ok());
        }
        assert!(cal.business_days().len() < cal.all_days().len());
    }

    #[test]
    fn test_month_slices() {
        let cal = TradingCalendar::from_holidays("empty", []);
        let feb = cal.calendar_days_in_month(2024, 2);
        assert_eq!(feb.len(), 29);
        assert_eq!(feb.first().copied(), Some(date(2024, 2, 1)));
        assert_eq!(feb.last().copied(), Some(date(2024, 2, 29)));

        // January 2024: 23 weekdays
        assert_eq!(cal.business_days_in_month(2024, 1).len(), 23);

        // Outside the horizon the slice is empty
        assert!(cal.business_days_in_month(2099, 12).is_empty());
        assert!(cal.calendar_days_in_month(1989, 6).is_empty());
    }

    #[test]
    fn test_neighbor_queries() {
        let cal = TradingCalendar::from_holidays("one", [date(2024, 1, 8)]);
        // Saturday rolls forward past the Monday holiday
        assert_eq!(
            cal.next_business_day_on_or_after(date(2024, 1, 6)),
            Some(date(2024, 1, 9))
        );
        // A business day is its own on-or-after result
        assert_eq!(
            cal.next_business_day_on_or_after(date(2024, 1, 9)),
            Some(date(2024, 1, 9))
        );
        assert_eq!(
            cal.next_business_day_after(date(2024, 1, 9)),
            Some(date(2024, 1, 10))
        );
        assert_eq!(
            cal.previous_business_day_before(date(2024, 1, 9)),
            Some(date(2024, 1, 5))
        );
        // Nothing before the start of the horizon
        assert_eq!(cal.previous_business_day_before(date(1990, 1, 1)), None);
        // Nothing after the end of the horizon
        assert_eq!(cal.next_business_day_after(date(2069, 12, 31)), None);
    }

    #[test]
    fn test_from_business_days() {
        let days = [date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 2)];
        let cal = TradingCalendar::from_business_days("feed", days).unwrap();
        assert_eq!(cal.business_days().len(), 2);
        assert!(cal.is_business_day(date(2024, 1, 2)));
    }

    #[test]
    fn test_from_business_days_rejects_empty_and_out_of_horizon() {
        let err = TradingCalendar::from_business_days("feed", []).unwrap_err();
        assert!(matches!(err, EttjError::CalendarUnavailable { .. }));

        let err =
            TradingCalendar::from_business_days("feed", [date(2070, 1, 2)]).unwrap_err();
        assert!(matches!(err, EttjError::CalendarUnavailable { .. }));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "name": "Custom",
            "holidays": ["2024-01-08", "2024-12-25"]
        }"#;
        let cal = TradingCalendar::from_json(json).unwrap();
        assert_eq!(cal.name(), "Custom");
        assert!(!cal.is_business_day(date(2024, 1, 8)));
        assert!(!cal.is_business_day(date(2024, 12, 25)));
        assert!(cal.is_business_day(date(2024, 1, 9)));
    }

    #[test]
    fn test_from_json_rejects_bad_date() {
        let json = r#"{"name": "Bad", "holidays": ["2024-13-01"]}"#;
        let err = TradingCalendar::from_json(json).unwrap_err();
        assert!(matches!(err, EttjError::CalendarUnavailable { .. }));
        assert!(err.to_string().contains("2024-13-01"));
    }
}
