//! Domain types: calendar dates and contract codes.

mod contract;
mod date;

pub use contract::{ContractCode, MonthCode};
pub use date::Date;
