//! Count command implementation.

use anyhow::Result;
use clap::Args;

use ettj_core::calendar::TradingCalendar;
use ettj_core::daycount::{business_day_count, calendar_day_count};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::output::{print_output, KeyValue};

/// Arguments for the count command.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Start date (YYYY-MM-DD), excluded from the count
    #[arg(short, long)]
    pub start: String,

    /// End date (YYYY-MM-DD), included in the count
    #[arg(short, long)]
    pub end: String,
}

/// Execute the count command.
pub fn execute(args: CountArgs, format: OutputFormat, calendar: &TradingCalendar) -> Result<()> {
    let start = parse_date(&args.start)?;
    let end = parse_date(&args.end)?;

    let du = business_day_count(calendar, start, end)?;
    let dc = calendar_day_count(calendar, start, end)?;

    let rows = vec![
        KeyValue::new("start", start.to_string()),
        KeyValue::new("end", end.to_string()),
        KeyValue::new("business_day_count", du.to_string()),
        KeyValue::new("calendar_day_count", dc.to_string()),
    ];

    print_output(&rows, format)
}
