//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{CountArgs, EnrichArgs, ExpiryArgs};

/// ETTJ - futures expiry and day-count engine CLI
#[derive(Parser)]
#[command(name = "ettj")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Calendar JSON file (name + holiday list); defaults to the built-in
    /// B3 calendar
    #[arg(short, long, global = true)]
    pub calendar: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the expiry date of one contract code
    Expiry(ExpiryArgs),

    /// Count business and calendar days between two dates
    Count(CountArgs),

    /// Enrich a CSV of contract rows with expiry dates, day counts, and rates
    Enrich(EnrichArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the first record)
    Minimal,
}
