//! Annualized rate from a futures unit price.
//!
//! B3 local interest-rate contracts (DI1, DAP) quote a unit price (PU)
//! against a notional of 100,000 at expiry. The implied annualized rate on
//! the business/252 basis is `(100000 / PU)^(252 / du) - 1`.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{EttjError, EttjResult};

/// Business days per year on the Brazilian 252 basis.
pub const BUSINESS_DAYS_PER_YEAR: u32 = 252;

/// Notional unit price at expiry.
const NOTIONAL: u32 = 100_000;

/// Computes the annualized rate implied by a settlement price.
///
/// `business_days` is the business-day count from the trade date to the
/// contract expiry, exclusive of the former and inclusive of the latter.
///
/// # Errors
///
/// Returns `EttjError::InvalidPrice` for a non-positive price and
/// `EttjError::MathError` for a zero day count (an expired or same-day
/// contract carries no rate).
pub fn annualized_rate(settlement_price: Decimal, business_days: u32) -> EttjResult<Decimal> {
    if settlement_price <= Decimal::ZERO {
        return Err(EttjError::InvalidPrice {
            value: settlement_price,
            reason: "settlement price must be positive".to_string(),
        });
    }
    if business_days == 0 {
        return Err(EttjError::math_error(
            "zero business days to expiry, rate is undefined",
        ));
    }

    let ratio = Decimal::from(NOTIONAL) / settlement_price;
    let exponent = Decimal::from(BUSINESS_DAYS_PER_YEAR) / Decimal::from(business_days);
    Ok(ratio.powd(exponent) - Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_par_price_is_zero_rate() {
        let rate = annualized_rate(dec!(100000), 126).unwrap();
        assert!(rate.abs() < dec!(0.0000001));
    }

    #[test]
    fn test_one_year_contract() {
        // One full year: rate is just the price ratio minus one
        let rate = annualized_rate(dec!(95000), 252).unwrap();
        let expected = dec!(100000) / dec!(95000) - Decimal::ONE;
        assert!((rate - expected).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_half_year_compounds() {
        // 126 business days at PU 95000: (100000/95000)^2 - 1
        let rate = annualized_rate(dec!(95000), 126).unwrap();
        let ratio = dec!(100000) / dec!(95000);
        let expected = ratio * ratio - Decimal::ONE;
        assert!((rate - expected).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_rejects_non_positive_price() {
        assert!(matches!(
            annualized_rate(Decimal::ZERO, 10).unwrap_err(),
            EttjError::InvalidPrice { .. }
        ));
        assert!(matches!(
            annualized_rate(dec!(-95000), 10).unwrap_err(),
            EttjError::InvalidPrice { .. }
        ));
    }

    #[test]
    fn test_rejects_zero_day_count() {
        assert!(matches!(
            annualized_rate(dec!(95000), 0).unwrap_err(),
            EttjError::MathError { .. }
        ));
    }
}
