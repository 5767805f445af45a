//! Holiday ruleset for the B3 exchange (São Paulo).
//!
//! Exchange holidays are the national fixed feasts plus the Easter-derived
//! movable feasts (Carnival Monday/Tuesday, Good Friday, Corpus Christi).
//! The exchange also closes on Christmas Eve and New Year's Eve.

use chrono::NaiveDate;

use super::{HORIZON_END_YEAR, HORIZON_START_YEAR};
use crate::types::Date;

/// Fixed-date holidays observed every year: Confraternização Universal,
/// Tiradentes, Dia do Trabalho, Independência, Nossa Senhora Aparecida,
/// Finados, Proclamação da República, Christmas Eve, Christmas, New Year's Eve.
const FIXED_HOLIDAYS: &[(u32, u32)] = &[
    (1, 1),
    (4, 21),
    (5, 1),
    (9, 7),
    (10, 12),
    (11, 2),
    (11, 15),
    (12, 24),
    (12, 25),
    (12, 31),
];

/// Offsets from Easter Sunday: Carnival Monday, Carnival Tuesday,
/// Good Friday, Corpus Christi.
const EASTER_OFFSETS: &[i64] = &[-48, -47, -2, 60];

/// All B3 holidays over the calendar horizon, ascending.
#[must_use]
pub fn holidays() -> Vec<Date> {
    let mut days: Vec<Date> = (HORIZON_START_YEAR..HORIZON_END_YEAR)
        .flat_map(holidays_for_year)
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// The B3 holidays of a single year.
#[must_use]
pub fn holidays_for_year(year: i32) -> Vec<Date> {
    let mut days = Vec::with_capacity(FIXED_HOLIDAYS.len() + EASTER_OFFSETS.len() + 1);

    for &(month, day) in FIXED_HOLIDAYS {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            days.push(Date::from(date));
        }
    }

    // Consciência Negra, national holiday since 2024
    if year >= 2024 {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 11, 20) {
            days.push(Date::from(date));
        }
    }

    if let Some(easter) = easter_sunday(year) {
        for &offset in EASTER_OFFSETS {
            days.push(Date::from(easter + chrono::Duration::days(offset)));
        }
    }

    // A movable feast can land on a fixed one (Good Friday fell on
    // Tiradentes in 2000)
    days.sort_unstable();
    days.dedup();
    days
}

/// Easter Sunday via the Anonymous Gregorian computus.
#[allow(clippy::many_single_char_names)]
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_sunday() {
        assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
        assert_eq!(easter_sunday(2019), NaiveDate::from_ymd_opt(2019, 4, 21));
    }

    #[test]
    fn test_movable_feasts_2024() {
        let days = holidays_for_year(2024);
        assert!(days.contains(&date(2024, 2, 12))); // Carnival Monday
        assert!(days.contains(&date(2024, 2, 13))); // Carnival Tuesday
        assert!(days.contains(&date(2024, 3, 29))); // Good Friday
        assert!(days.contains(&date(2024, 5, 30))); // Corpus Christi
    }

    #[test]
    fn test_fixed_feasts() {
        let days = holidays_for_year(2021);
        assert!(days.contains(&date(2021, 1, 1)));
        assert!(days.contains(&date(2021, 4, 21)));
        assert!(days.contains(&date(2021, 9, 7)));
        assert!(days.contains(&date(2021, 12, 31)));
    }

    #[test]
    fn test_consciencia_negra_from_2024() {
        assert!(!holidays_for_year(2023).contains(&date(2023, 11, 20)));
        assert!(holidays_for_year(2024).contains(&date(2024, 11, 20)));
        assert!(holidays_for_year(2030).contains(&date(2030, 11, 20)));
    }

    #[test]
    fn test_good_friday_can_land_on_tiradentes() {
        // Easter 2000 was April 23, so Good Friday coincided with Tiradentes
        let days = holidays_for_year(2000);
        assert_eq!(days.iter().filter(|d| **d == date(2000, 4, 21)).count(), 1);
    }

    #[test]
    fn test_full_horizon_is_sorted_and_unique() {
        let days = holidays();
        assert!(days.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(days.first().map(Date::year), Some(1990));
        assert_eq!(days.last().map(Date::year), Some(2069));
    }
}
