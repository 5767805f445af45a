//! Integration tests validated against the published B3 trading calendar.
//!
//! Expiry dates and day counts below were cross-checked against the
//! exchange's holiday list and historical DI1/DAP settlement schedules.

use rust_decimal_macros::dec;

use ettj_core::batch::{enrich, ContractRow};
use ettj_core::calendar::TradingCalendar;
use ettj_core::daycount::{business_day_count, calendar_day_count};
use ettj_core::expiry::ExpiryConvention;
use ettj_core::types::Date;
use ettj_core::EttjError;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn row(trade: &str, code: &str) -> ContractRow {
    ContractRow {
        trade_date: Date::parse(trade).unwrap(),
        contract_code: code.to_string(),
        settlement_price: None,
    }
}

// ============================================================================
// Expiry resolution against known exchange dates
// ============================================================================

#[test]
fn di1_january_2021_opens_on_the_fourth() {
    // Jan 1, 2021 was a Friday holiday; the DI1 F21 settlement date was
    // Monday Jan 4
    let cal = TradingCalendar::b3();
    let expiry = ExpiryConvention::FirstBusinessDay
        .resolve(&cal, 1, 2021)
        .unwrap();
    assert_eq!(expiry, date(2021, 1, 4));
}

#[test]
fn di1_first_business_days_2024() {
    let cal = TradingCalendar::b3();
    let cases = [
        (1, date(2024, 1, 2)),  // Jan 1 holiday on a Monday
        (2, date(2024, 2, 1)),
        (4, date(2024, 4, 1)),
        (11, date(2024, 11, 1)), // Nov 1 was an open Friday
    ];
    for (month, expected) in cases {
        let expiry = ExpiryConvention::FirstBusinessDay
            .resolve(&cal, month, 2024)
            .unwrap();
        assert_eq!(expiry, expected, "month {month}");
    }
}

#[test]
fn last_business_day_of_2020_was_december_30() {
    let cal = TradingCalendar::b3();
    let expiry = ExpiryConvention::LastBusinessDay
        .resolve(&cal, 12, 2020)
        .unwrap();
    assert_eq!(expiry, date(2020, 12, 30));
}

#[test]
fn third_friday_of_january_2021_needs_no_adjustment() {
    let cal = TradingCalendar::b3();
    let expiry = ExpiryConvention::ThirdFridayAdjusted
        .resolve(&cal, 1, 2021)
        .unwrap();
    assert_eq!(expiry, date(2021, 1, 15));
}

#[test]
fn third_friday_april_2019_rolls_back_off_good_friday() {
    let cal = TradingCalendar::b3();
    let expiry = ExpiryConvention::ThirdFridayAdjusted
        .resolve(&cal, 4, 2019)
        .unwrap();
    assert_eq!(expiry, date(2019, 4, 18));
}

#[test]
fn dap_november_2017_rolls_forward_off_proclamation_day() {
    // Nov 15, 2017: a Wednesday, nearest the 15th, and a holiday
    let cal = TradingCalendar::b3();
    let expiry = ExpiryConvention::WednesdayNearestFifteenAdjusted
        .resolve(&cal, 11, 2017)
        .unwrap();
    assert_eq!(expiry, date(2017, 11, 16));
}

#[test]
fn fifteenth_september_2019_rolls_off_the_weekend() {
    let cal = TradingCalendar::b3();
    let expiry = ExpiryConvention::FifteenthOrNextBusinessDay
        .resolve(&cal, 9, 2019)
        .unwrap();
    assert_eq!(expiry, date(2019, 9, 16));
}

#[test]
fn first_business_day_after_carnival_2025() {
    // Carnival Monday/Tuesday 2025 were March 3-4, on top of the weekend
    let cal = TradingCalendar::b3();
    let expiry = ExpiryConvention::FirstBusinessDay
        .resolve(&cal, 3, 2025)
        .unwrap();
    assert_eq!(expiry, date(2025, 3, 5));
}

// ============================================================================
// Day counts
// ============================================================================

#[test]
fn business_days_over_a_plain_january_week() {
    let cal = TradingCalendar::b3();
    let du = business_day_count(&cal, date(2024, 1, 2), date(2024, 1, 10)).unwrap();
    assert_eq!(du, 6);
    let dc = calendar_day_count(&cal, date(2024, 1, 2), date(2024, 1, 10)).unwrap();
    assert_eq!(dc, 8);
}

#[test]
fn business_days_to_the_f21_wind_down() {
    // Jan 4 to Jan 15, 2021: the 5th through the 15th minus two weekends
    let cal = TradingCalendar::b3();
    let du = business_day_count(&cal, date(2021, 1, 4), date(2021, 1, 15)).unwrap();
    assert_eq!(du, 9);
}

#[test]
fn du_and_dc_for_a_one_year_di1() {
    // DI1 F22 seen from the F21 expiry date: every business day of 2021
    // except Jan 4 itself, plus the Jan 3, 2022 settlement day
    let cal = TradingCalendar::b3();
    let expiry = ExpiryConvention::FirstBusinessDay
        .resolve(&cal, 1, 2022)
        .unwrap();
    assert_eq!(expiry, date(2022, 1, 3));

    let du = business_day_count(&cal, date(2021, 1, 4), expiry).unwrap();
    let dc = calendar_day_count(&cal, date(2021, 1, 4), expiry).unwrap();
    assert_eq!(dc, 364);
    // 2021 had 249 sessions (261 weekdays, 12 weekday holidays);
    // drop Jan 4, add the Jan 3, 2022 settlement day
    assert_eq!(du, 249);
}

// ============================================================================
// Batch behavior
// ============================================================================

#[test]
fn batch_reports_out_of_horizon_contract_per_row() {
    let cal = TradingCalendar::b3();
    let rows = vec![row("2021-01-04", "F22"), row("2021-01-04", "Z99")];
    let result = enrich(&cal, ExpiryConvention::LastBusinessDay, &rows);

    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].index, 1);
    assert_eq!(
        result.errors[0].error,
        EttjError::NoBusinessDayInMonth {
            month: 12,
            year: 2099
        }
    );
}

#[test]
fn batch_attaches_di1_rate() {
    let cal = TradingCalendar::b3();
    let mut input = row("2021-01-04", "F22");
    input.settlement_price = Some(dec!(97000));

    let result = enrich(&cal, ExpiryConvention::FirstBusinessDay, &[input]);
    assert!(result.is_clean());

    let enriched = &result.rows[0];
    assert_eq!(enriched.business_day_count, 249);
    let rate = enriched.rate.expect("priced row carries a rate");
    // (100000/97000)^(252/249) - 1, a small positive rate
    assert!(rate > dec!(0.029));
    assert!(rate < dec!(0.032));
}
