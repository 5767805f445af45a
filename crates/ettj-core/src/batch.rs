//! Row-wise enrichment of contract tables.
//!
//! Given rows of (trade date, raw ticker) and one convention, attach the
//! expiry date, both day counts, and (when a settlement price is present)
//! the implied annualized rate. A malformed row is captured as a
//! [`RowError`] and never aborts its siblings; convention and calendar
//! problems are caller errors handled before this layer.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::TradingCalendar;
use crate::daycount;
use crate::error::{EttjError, EttjResult};
use crate::expiry::ExpiryConvention;
use crate::rates;
use crate::types::{ContractCode, Date};

/// One input row: a trade date and the raw ticker suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRow {
    /// The session date the price was observed on.
    pub trade_date: Date,
    /// Raw `<MonthLetter><YY>` ticker suffix, decoded during enrichment.
    pub contract_code: String,
    /// Settlement (adjustment) price, when the source carries one.
    #[serde(default)]
    pub settlement_price: Option<Decimal>,
}

/// One output row with the derived fields attached.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRow {
    /// The session date the price was observed on.
    pub trade_date: Date,
    /// Raw ticker suffix, as received.
    pub contract_code: String,
    /// Resolved contract expiry date.
    pub expiry_date: Date,
    /// Business days in (trade_date, expiry_date].
    pub business_day_count: u32,
    /// Calendar days in (trade_date, expiry_date].
    pub calendar_day_count: u32,
    /// Settlement price, passed through.
    pub settlement_price: Option<Decimal>,
    /// Annualized base-252 rate; absent without a price or with zero
    /// business days to expiry.
    pub rate: Option<Decimal>,
}

/// A row that failed to enrich, kept aside with its position and cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// Zero-based index of the row in the input table.
    pub index: usize,
    /// The raw ticker suffix of the failed row.
    pub contract_code: String,
    /// What went wrong.
    pub error: EttjError,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} ('{}'): {}", self.index, self.contract_code, self.error)
    }
}

/// The outcome of one batch invocation.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Successfully enriched rows, in input order.
    pub rows: Vec<EnrichedRow>,
    /// Failed rows, in input order.
    pub errors: Vec<RowError>,
}

impl BatchResult {
    /// Returns true when every input row enriched successfully.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Enriches every row of a contract table under one convention.
///
/// Rows are independent: each failure is recorded in
/// [`BatchResult::errors`] with its input index while the remaining rows
/// proceed.
#[must_use]
pub fn enrich(
    calendar: &TradingCalendar,
    convention: ExpiryConvention,
    rows: &[ContractRow],
) -> BatchResult {
    let mut result = BatchResult::default();

    for (index, row) in rows.iter().enumerate() {
        match enrich_row(calendar, convention, row) {
            Ok(enriched) => result.rows.push(enriched),
            Err(error) => {
                warn!("dropping row {index} ('{}'): {error}", row.contract_code);
                result.errors.push(RowError {
                    index,
                    contract_code: row.contract_code.clone(),
                    error,
                });
            }
        }
    }

    result
}

fn enrich_row(
    calendar: &TradingCalendar,
    convention: ExpiryConvention,
    row: &ContractRow,
) -> EttjResult<EnrichedRow> {
    let code = ContractCode::parse(&row.contract_code)?;
    let expiry_date = convention.resolve(calendar, code.month(), code.year())?;
    let business_day_count = daycount::business_day_count(calendar, row.trade_date, expiry_date)?;
    let calendar_day_count = daycount::calendar_day_count(calendar, row.trade_date, expiry_date)?;

    // An expired or same-day contract has no rate to imply
    let rate = match row.settlement_price {
        Some(price) if business_day_count > 0 => {
            Some(rates::annualized_rate(price, business_day_count)?)
        }
        _ => None,
    };

    Ok(EnrichedRow {
        trade_date: row.trade_date,
        contract_code: row.contract_code.clone(),
        expiry_date,
        business_day_count,
        calendar_day_count,
        settlement_price: row.settlement_price,
        rate,
    })
}
