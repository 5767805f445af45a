//! Error types for the ETTJ engine.
//!
//! Row-local failures (contract decoding, expiry resolution) are meant to be
//! captured per row by the batch layer; `UnknownConvention` and
//! `CalendarUnavailable` abort the whole invocation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for ETTJ operations.
pub type EttjResult<T> = Result<T, EttjError>;

/// The main error type for ETTJ operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EttjError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Malformed contract code.
    #[error("Invalid contract code '{code}': {reason}")]
    Decode {
        /// The offending contract code.
        code: String,
        /// Why decoding failed.
        reason: String,
    },

    /// Convention selector not in the recognized set.
    #[error("Unknown expiry convention: '{name}'")]
    UnknownConvention {
        /// The unrecognized selector string.
        name: String,
    },

    /// The contract month contains no business day in the loaded calendar.
    #[error("No business day in {year}-{month:02}")]
    NoBusinessDayInMonth {
        /// Contract month (1-12).
        month: u32,
        /// Contract year.
        year: i32,
    },

    /// The contract month contains fewer than three Fridays in the loaded
    /// calendar (only possible when the horizon cuts the month short).
    #[error("Found {found} Friday(s) in {year}-{month:02}, need 3")]
    InsufficientFridays {
        /// Contract month (1-12).
        month: u32,
        /// Contract year.
        year: i32,
        /// How many Fridays the month window actually held.
        found: usize,
    },

    /// No business day exists on or after the 15th of the contract month.
    #[error("No business day on or after {year}-{month:02}-15")]
    NoBusinessDayAfterFifteenth {
        /// Contract month (1-12).
        month: u32,
        /// Contract year.
        year: i32,
    },

    /// Forward holiday substitution ran past the calendar horizon.
    #[error("No business day after {date} within the calendar horizon")]
    NoBusinessDayAfter {
        /// The date the forward search started from.
        date: Date,
    },

    /// Backward holiday substitution ran past the calendar horizon.
    #[error("No business day before {date} within the calendar horizon")]
    NoBusinessDayBefore {
        /// The date the backward search started from.
        date: Date,
    },

    /// A day-count endpoint falls outside the loaded horizon.
    #[error("Date {date} is outside the calendar horizon")]
    OutOfHorizon {
        /// The out-of-range date.
        date: Date,
    },

    /// The calendar source failed to produce a usable calendar.
    #[error("Calendar unavailable: {reason}")]
    CalendarUnavailable {
        /// Description of the failure.
        reason: String,
    },

    /// Invalid settlement price.
    #[error("Invalid settlement price {value}: {reason}")]
    InvalidPrice {
        /// The invalid price.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Mathematical error (division by zero, overflow, etc.).
    #[error("Mathematical error: {reason}")]
    MathError {
        /// Description of the error.
        reason: String,
    },
}

impl EttjError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a contract decode error.
    #[must_use]
    pub fn decode(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        Self::UnknownConvention { name: name.into() }
    }

    /// Creates a calendar unavailable error.
    #[must_use]
    pub fn calendar_unavailable(reason: impl Into<String>) -> Self {
        Self::CalendarUnavailable {
            reason: reason.into(),
        }
    }

    /// Creates a math error.
    #[must_use]
    pub fn math_error(reason: impl Into<String>) -> Self {
        Self::MathError {
            reason: reason.into(),
        }
    }

    /// Returns true if the error is local to a single row rather than
    /// fatal to a whole batch invocation.
    #[must_use]
    pub fn is_row_local(&self) -> bool {
        !matches!(
            self,
            Self::UnknownConvention { .. } | Self::CalendarUnavailable { .. }
        )
    }
}
