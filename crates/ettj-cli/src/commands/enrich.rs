//! Enrich command implementation.
//!
//! Reads a CSV of contract rows, attaches expiry dates, day counts, and
//! rates, and writes the enriched table. Failed rows are reported on
//! stderr and never block the rest of the batch.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use ettj_core::batch::{enrich, ContractRow, EnrichedRow};
use ettj_core::calendar::TradingCalendar;
use ettj_core::expiry::ExpiryConvention;

use crate::cli::OutputFormat;
use crate::output::{print_output, print_success, print_warning};

/// Arguments for the enrich command.
#[derive(Args, Debug)]
pub struct EnrichArgs {
    /// Input CSV with columns trade_date,contract_code[,settlement_price]
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CSV path; prints to stdout in the chosen format when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Expiry convention: prim_du, ult_du, terceira_sexta,
    /// quarta_prox_quinze, or dia_15
    #[arg(short = 'v', long)]
    pub convention: String,
}

/// One enriched row flattened for output.
#[derive(Debug, Serialize, Tabled)]
struct EnrichedRecord {
    trade_date: String,
    contract_code: String,
    expiry_date: String,
    business_day_count: u32,
    calendar_day_count: u32,
    settlement_price: String,
    rate: String,
}

impl From<&EnrichedRow> for EnrichedRecord {
    fn from(row: &EnrichedRow) -> Self {
        Self {
            trade_date: row.trade_date.to_string(),
            contract_code: row.contract_code.clone(),
            expiry_date: row.expiry_date.to_string(),
            business_day_count: row.business_day_count,
            calendar_day_count: row.calendar_day_count,
            settlement_price: row
                .settlement_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            rate: row.rate.map(|r| r.to_string()).unwrap_or_default(),
        }
    }
}

/// Execute the enrich command.
pub fn execute(args: EnrichArgs, format: OutputFormat, calendar: &TradingCalendar) -> Result<()> {
    let convention: ExpiryConvention = args.convention.parse()?;

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;

    let mut rows: Vec<ContractRow> = Vec::new();
    for (line, record) in reader.deserialize::<ContractRow>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => print_warning(&format!("skipping unreadable CSV record {line}: {e}")),
        }
    }

    let result = enrich(calendar, convention, &rows);
    for error in &result.errors {
        print_warning(&error.to_string());
    }

    let records: Vec<EnrichedRecord> = result.rows.iter().map(EnrichedRecord::from).collect();

    match args.output {
        Some(ref path) => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            for record in &records {
                writer.serialize(record)?;
            }
            writer.flush()?;
            print_success(&format!(
                "{} rows enriched, {} failed -> {}",
                result.rows.len(),
                result.errors.len(),
                path.display()
            ));
        }
        None => {
            print_output(&records, format)?;
            if !result.is_clean() {
                print_warning(&format!("{} row(s) failed", result.errors.len()));
            }
        }
    }

    Ok(())
}
