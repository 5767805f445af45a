//! Expiry command implementation.
//!
//! Resolves one contract code to its expiry date, optionally with day
//! counts from a trade date.

use anyhow::Result;
use clap::Args;

use ettj_core::calendar::TradingCalendar;
use ettj_core::daycount::{business_day_count, calendar_day_count};
use ettj_core::expiry::ExpiryConvention;
use ettj_core::types::ContractCode;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::output::{print_output, KeyValue};

/// Arguments for the expiry command.
#[derive(Args, Debug)]
pub struct ExpiryArgs {
    /// Contract code, e.g. F25
    pub code: String,

    /// Expiry convention: prim_du, ult_du, terceira_sexta,
    /// quarta_prox_quinze, or dia_15
    #[arg(short = 'v', long)]
    pub convention: String,

    /// Trade date (YYYY-MM-DD); adds day counts to the output
    #[arg(short, long)]
    pub trade_date: Option<String>,
}

/// Execute the expiry command.
pub fn execute(args: ExpiryArgs, format: OutputFormat, calendar: &TradingCalendar) -> Result<()> {
    let convention: ExpiryConvention = args.convention.parse()?;
    let code = ContractCode::parse(&args.code)?;
    let expiry = convention.resolve(calendar, code.month(), code.year())?;

    let mut rows = vec![
        KeyValue::new("contract_code", code.to_string()),
        KeyValue::new("month", code.month().to_string()),
        KeyValue::new("year", code.year().to_string()),
        KeyValue::new("convention", convention.to_string()),
        KeyValue::new("expiry_date", expiry.to_string()),
    ];

    if let Some(ref raw) = args.trade_date {
        let trade_date = parse_date(raw)?;
        let du = business_day_count(calendar, trade_date, expiry)?;
        let dc = calendar_day_count(calendar, trade_date, expiry)?;
        rows.push(KeyValue::new("trade_date", trade_date.to_string()));
        rows.push(KeyValue::new("business_day_count", du.to_string()));
        rows.push(KeyValue::new("calendar_day_count", dc.to_string()));
    }

    print_output(&rows, format)
}
