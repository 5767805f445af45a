//! Expiry conventions and their resolution algorithms.
//!
//! Each B3-traded contract family settles on a different day of its
//! delivery month: DI1 on the first business day, DDI on the 15th rolled
//! forward, DOL on the first business day, equity index futures on the
//! Wednesday nearest the 15th, and so on. The five rules here cover the
//! families the curve builder consumes.
//!
//! Holiday adjustment direction is part of each exchange rule and differs
//! between conventions: the third-Friday rule substitutes the prior
//! business day, the Wednesday-nearest-15 rule the next one. The two must
//! not be unified.

use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

use crate::calendar::TradingCalendar;
use crate::error::{EttjError, EttjResult};
use crate::types::Date;

/// A named rule mapping a contract month/year to its expiry date.
///
/// Selector strings (the `FromStr` input) follow the curve-database
/// configuration vocabulary: `prim_du`, `ult_du`, `terceira_sexta`,
/// `quarta_prox_quinze`, `dia_15`.
///
/// # Example
///
/// ```rust
/// use ettj_core::calendar::TradingCalendar;
/// use ettj_core::expiry::ExpiryConvention;
///
/// let cal = TradingCalendar::b3();
/// let convention: ExpiryConvention = "prim_du".parse().unwrap();
/// let expiry = convention.resolve(&cal, 1, 2021).unwrap();
/// assert_eq!(expiry.to_string(), "2021-01-04");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryConvention {
    /// First business day of the contract month (DI1, DAP, DOL).
    FirstBusinessDay,

    /// Last business day of the contract month.
    LastBusinessDay,

    /// Third Friday of the contract month; on a holiday, the prior
    /// business day.
    ThirdFridayAdjusted,

    /// Wednesday closest to the 15th; on a holiday, the next business day.
    WednesdayNearestFifteenAdjusted,

    /// The 15th of the contract month, or the next business day after it.
    FifteenthOrNextBusinessDay,
}

impl ExpiryConvention {
    /// Resolves the expiry date for a contract month under this convention.
    ///
    /// # Errors
    ///
    /// Returns the convention-specific resolution error when the month
    /// window is empty or holiday substitution runs out of the horizon;
    /// see [`EttjError`].
    pub fn resolve(&self, calendar: &TradingCalendar, month: u32, year: i32) -> EttjResult<Date> {
        match self {
            Self::FirstBusinessDay => first_business_day(calendar, month, year),
            Self::LastBusinessDay => last_business_day(calendar, month, year),
            Self::ThirdFridayAdjusted => third_friday_adjusted(calendar, month, year),
            Self::WednesdayNearestFifteenAdjusted => {
                wednesday_nearest_fifteen_adjusted(calendar, month, year)
            }
            Self::FifteenthOrNextBusinessDay => {
                fifteenth_or_next_business_day(calendar, month, year)
            }
        }
    }

    /// Returns the configuration selector string for this convention.
    #[must_use]
    pub fn selector(&self) -> &'static str {
        match self {
            Self::FirstBusinessDay => "prim_du",
            Self::LastBusinessDay => "ult_du",
            Self::ThirdFridayAdjusted => "terceira_sexta",
            Self::WednesdayNearestFifteenAdjusted => "quarta_prox_quinze",
            Self::FifteenthOrNextBusinessDay => "dia_15",
        }
    }

    /// Returns all conventions in selector order.
    #[must_use]
    pub fn all() -> &'static [ExpiryConvention] {
        &[
            ExpiryConvention::FirstBusinessDay,
            ExpiryConvention::LastBusinessDay,
            ExpiryConvention::ThirdFridayAdjusted,
            ExpiryConvention::WednesdayNearestFifteenAdjusted,
            ExpiryConvention::FifteenthOrNextBusinessDay,
        ]
    }
}

impl fmt::Display for ExpiryConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}

impl FromStr for ExpiryConvention {
    type Err = EttjError;

    /// Parses a convention selector.
    ///
    /// Accepts the configuration strings (`prim_du`, ...) and the variant
    /// names (`FirstBusinessDay`, ...), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prim_du" | "firstbusinessday" => Ok(Self::FirstBusinessDay),
            "ult_du" | "lastbusinessday" => Ok(Self::LastBusinessDay),
            "terceira_sexta" | "thirdfridayadjusted" => Ok(Self::ThirdFridayAdjusted),
            "quarta_prox_quinze" | "wednesdaynearestfifteenadjusted" => {
                Ok(Self::WednesdayNearestFifteenAdjusted)
            }
            "dia_15" | "fifteenthornextbusinessday" => Ok(Self::FifteenthOrNextBusinessDay),
            _ => Err(EttjError::unknown_convention(s)),
        }
    }
}

fn first_business_day(calendar: &TradingCalendar, month: u32, year: i32) -> EttjResult<Date> {
    calendar
        .business_days_in_month(year, month)
        .first()
        .copied()
        .ok_or(EttjError::NoBusinessDayInMonth { month, year })
}

fn last_business_day(calendar: &TradingCalendar, month: u32, year: i32) -> EttjResult<Date> {
    calendar
        .business_days_in_month(year, month)
        .last()
        .copied()
        .ok_or(EttjError::NoBusinessDayInMonth { month, year })
}

fn third_friday_adjusted(calendar: &TradingCalendar, month: u32, year: i32) -> EttjResult<Date> {
    let fridays: Vec<Date> = calendar
        .calendar_days_in_month(year, month)
        .iter()
        .filter(|d| d.weekday() == Weekday::Fri)
        .copied()
        .collect();

    let third = *fridays.get(2).ok_or(EttjError::InsufficientFridays {
        month,
        year,
        found: fridays.len(),
    })?;

    if calendar.is_business_day(third) {
        Ok(third)
    } else {
        calendar
            .previous_business_day_before(third)
            .ok_or(EttjError::NoBusinessDayBefore { date: third })
    }
}

fn wednesday_nearest_fifteen_adjusted(
    calendar: &TradingCalendar,
    month: u32,
    year: i32,
) -> EttjResult<Date> {
    // min_by_key is stable, so equal distances resolve to the earlier date
    let nearest = calendar
        .calendar_days_in_month(year, month)
        .iter()
        .filter(|d| d.weekday() == Weekday::Wed)
        .min_by_key(|d| d.distance_from_day(15))
        .copied()
        .ok_or(EttjError::NoBusinessDayInMonth { month, year })?;

    if calendar.is_business_day(nearest) {
        Ok(nearest)
    } else {
        calendar
            .next_business_day_after(nearest)
            .ok_or(EttjError::NoBusinessDayAfter { date: nearest })
    }
}

fn fifteenth_or_next_business_day(
    calendar: &TradingCalendar,
    month: u32,
    year: i32,
) -> EttjResult<Date> {
    let fifteenth = Date::from_ymd(year, month, 15)?;
    if fifteenth < TradingCalendar::horizon_start() {
        return Err(EttjError::OutOfHorizon { date: fifteenth });
    }
    calendar
        .next_business_day_on_or_after(fifteenth)
        .ok_or(EttjError::NoBusinessDayAfterFifteenth { month, year })
}
