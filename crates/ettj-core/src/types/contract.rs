//! Futures contract codes in the CME month-letter format.

use std::fmt;
use std::str::FromStr;

use crate::error::{EttjError, EttjResult};

/// The twelve CME delivery-month letters.
///
/// Each letter maps to one contract month: F=Jan, G=Feb, H=Mar, J=Apr,
/// K=May, M=Jun, N=Jul, Q=Aug, U=Sep, V=Oct, X=Nov, Z=Dec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum MonthCode {
    F,
    G,
    H,
    J,
    K,
    M,
    N,
    Q,
    U,
    V,
    X,
    Z,
}

impl MonthCode {
    /// Returns the month number (1-12) for this code.
    #[must_use]
    pub const fn number(&self) -> u32 {
        match self {
            MonthCode::F => 1,
            MonthCode::G => 2,
            MonthCode::H => 3,
            MonthCode::J => 4,
            MonthCode::K => 5,
            MonthCode::M => 6,
            MonthCode::N => 7,
            MonthCode::Q => 8,
            MonthCode::U => 9,
            MonthCode::V => 10,
            MonthCode::X => 11,
            MonthCode::Z => 12,
        }
    }

    /// Returns the ticker letter for this code.
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            MonthCode::F => 'F',
            MonthCode::G => 'G',
            MonthCode::H => 'H',
            MonthCode::J => 'J',
            MonthCode::K => 'K',
            MonthCode::M => 'M',
            MonthCode::N => 'N',
            MonthCode::Q => 'Q',
            MonthCode::U => 'U',
            MonthCode::V => 'V',
            MonthCode::X => 'X',
            MonthCode::Z => 'Z',
        }
    }

    /// Looks up a month code by its ticker letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'F' => Some(MonthCode::F),
            'G' => Some(MonthCode::G),
            'H' => Some(MonthCode::H),
            'J' => Some(MonthCode::J),
            'K' => Some(MonthCode::K),
            'M' => Some(MonthCode::M),
            'N' => Some(MonthCode::N),
            'Q' => Some(MonthCode::Q),
            'U' => Some(MonthCode::U),
            'V' => Some(MonthCode::V),
            'X' => Some(MonthCode::X),
            'Z' => Some(MonthCode::Z),
            _ => None,
        }
    }

    /// Looks up a month code by month number (1-12).
    #[must_use]
    pub fn from_number(month: u32) -> Option<Self> {
        Self::all().iter().find(|c| c.number() == month).copied()
    }

    /// Returns all twelve month codes in calendar order.
    #[must_use]
    pub fn all() -> &'static [MonthCode; 12] {
        &[
            MonthCode::F,
            MonthCode::G,
            MonthCode::H,
            MonthCode::J,
            MonthCode::K,
            MonthCode::M,
            MonthCode::N,
            MonthCode::Q,
            MonthCode::U,
            MonthCode::V,
            MonthCode::X,
            MonthCode::Z,
        ]
    }
}

/// A decoded contract code of the form `<MonthLetter><YY>`.
///
/// The two-digit year is interpreted as `2000 + YY`, matching the quoting
/// convention for B3-listed futures tickers (e.g. `F24` is January 2024).
///
/// # Example
///
/// ```rust
/// use ettj_core::types::ContractCode;
///
/// let code = ContractCode::parse("F24").unwrap();
/// assert_eq!(code.month(), 1);
/// assert_eq!(code.year(), 2024);
/// assert_eq!(code.to_string(), "F24");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractCode {
    month: MonthCode,
    year: i32,
}

impl ContractCode {
    /// Creates a contract code from a month code and a four-digit year.
    #[must_use]
    pub fn new(month: MonthCode, year: i32) -> Self {
        Self { month, year }
    }

    /// Decodes a raw ticker suffix.
    ///
    /// # Errors
    ///
    /// Returns `EttjError::Decode` when the first character is not one of
    /// the twelve month letters or the remainder is not two decimal digits.
    pub fn parse(code: &str) -> EttjResult<Self> {
        let mut chars = code.chars();
        let letter = chars
            .next()
            .ok_or_else(|| EttjError::decode(code, "empty contract code"))?;
        let month = MonthCode::from_letter(letter)
            .ok_or_else(|| EttjError::decode(code, format!("unknown month letter '{letter}'")))?;

        let digits = chars.as_str();
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EttjError::decode(
                code,
                format!("expected two year digits, got '{digits}'"),
            ));
        }
        let yy: i32 = digits
            .parse()
            .map_err(|_| EttjError::decode(code, format!("expected two year digits, got '{digits}'")))?;

        Ok(Self {
            month,
            year: 2000 + yy,
        })
    }

    /// Returns the contract month number (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month.number()
    }

    /// Returns the month code.
    #[must_use]
    pub fn month_code(&self) -> MonthCode {
        self.month
    }

    /// Returns the four-digit contract year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for ContractCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.month.letter(), self.year.rem_euclid(100))
    }
}

impl FromStr for ContractCode {
    type Err = EttjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
