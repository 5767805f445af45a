//! Day counts between a trade date and an expiry date.
//!
//! Both counters use the half-open interval (start, end]: the trade date
//! itself is excluded, the expiry date included. That matches the B3
//! quotation of "dias úteis até o vencimento" and must not drift, since the
//! count feeds the exponent of the annualized-rate formula.

use crate::calendar::TradingCalendar;
use crate::error::{EttjError, EttjResult};
use crate::types::Date;

/// Counts business days `d` with `start < d <= end`.
///
/// Returns 0 when `end <= start`.
///
/// # Errors
///
/// Returns `EttjError::OutOfHorizon` if either endpoint is outside the
/// calendar horizon; a silently truncated count would corrupt every rate
/// derived from it.
pub fn business_day_count(
    calendar: &TradingCalendar,
    start: Date,
    end: Date,
) -> EttjResult<u32> {
    count_in(calendar, calendar.business_days(), start, end)
}

/// Counts calendar days `d` with `start < d <= end`.
///
/// Same interval contract as [`business_day_count`], against every day of
/// the horizon; weekends and holidays all count.
///
/// # Errors
///
/// Returns `EttjError::OutOfHorizon` if either endpoint is outside the
/// calendar horizon.
pub fn calendar_day_count(
    calendar: &TradingCalendar,
    start: Date,
    end: Date,
) -> EttjResult<u32> {
    count_in(calendar, calendar.all_days(), start, end)
}

fn count_in(
    calendar: &TradingCalendar,
    days: &[Date],
    start: Date,
    end: Date,
) -> EttjResult<u32> {
    for endpoint in [start, end] {
        if !calendar.in_horizon(endpoint) {
            return Err(EttjError::OutOfHorizon { date: endpoint });
        }
    }
    if end <= start {
        return Ok(0);
    }

    let after_start = days.partition_point(|d| *d <= start);
    let through_end = days.partition_point(|d| *d <= end);
    Ok((through_end - after_start) as u32)
}
