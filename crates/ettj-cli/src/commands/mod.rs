//! Command implementations.

pub mod count;
pub mod enrich;
pub mod expiry;

pub use count::CountArgs;
pub use enrich::EnrichArgs;
pub use expiry::ExpiryArgs;

use anyhow::Context;
use std::path::Path;

use ettj_core::calendar::TradingCalendar;
use ettj_core::types::Date;

use crate::error::{CliError, CliResult};

/// Parses a YYYY-MM-DD date argument.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Loads the shared calendar: a JSON file when given, the built-in B3
/// calendar otherwise.
pub fn load_calendar(path: Option<&Path>) -> anyhow::Result<TradingCalendar> {
    match path {
        Some(path) => TradingCalendar::from_json_file(path)
            .with_context(|| format!("cannot load calendar from {}", path.display())),
        None => Ok(TradingCalendar::b3()),
    }
}
