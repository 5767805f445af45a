//! # ETTJ Core
//!
//! Trading calendar, futures-expiry resolution, and day-count engine for
//! building interest-rate term structures (ETTJ curves) from B3-listed
//! futures.
//!
//! The building blocks, leaves first:
//!
//! - **Types**: [`types::Date`], [`types::ContractCode`] with the CME
//!   month-letter alphabet
//! - **Calendar**: [`calendar::TradingCalendar`], two immutable ordered
//!   date sets over the horizon [1990-01-01, 2070-01-01)
//! - **Expiry**: [`expiry::ExpiryConvention`], five exchange rules with
//!   convention-specific holiday adjustment
//! - **Day counts**: [`daycount::business_day_count`] and
//!   [`daycount::calendar_day_count`] over the half-open interval (start, end]
//! - **Rates**: [`rates::annualized_rate`] on the business/252 basis
//! - **Batch**: [`batch::enrich`], row-wise application with per-row error
//!   isolation
//!
//! ## Example
//!
//! ```rust
//! use ettj_core::prelude::*;
//!
//! let calendar = TradingCalendar::b3();
//! let code = ContractCode::parse("F25")?;
//! let expiry = ExpiryConvention::FirstBusinessDay.resolve(&calendar, code.month(), code.year())?;
//! assert_eq!(expiry.to_string(), "2025-01-02");
//!
//! let trade_date = Date::parse("2024-07-01")?;
//! let du = business_day_count(&calendar, trade_date, expiry)?;
//! assert!(du > 0);
//! # Ok::<(), ettj_core::EttjError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod batch;
pub mod calendar;
pub mod daycount;
pub mod error;
pub mod expiry;
pub mod rates;
pub mod types;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{enrich, BatchResult, ContractRow, EnrichedRow, RowError};
    pub use crate::calendar::TradingCalendar;
    pub use crate::daycount::{business_day_count, calendar_day_count};
    pub use crate::error::{EttjError, EttjResult};
    pub use crate::expiry::ExpiryConvention;
    pub use crate::rates::annualized_rate;
    pub use crate::types::{ContractCode, Date, MonthCode};
}

// Re-export commonly used types at crate root
pub use calendar::TradingCalendar;
pub use error::{EttjError, EttjResult};
pub use expiry::ExpiryConvention;
pub use types::{ContractCode, Date, MonthCode};
