//! ETTJ CLI - futures expiry dates and day counts from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Resolve one contract's expiry date
//! ettj expiry F25 --convention prim_du
//!
//! # Day counts between two dates
//! ettj count --start 2024-01-02 --end 2024-01-10
//!
//! # Enrich a CSV of contract rows
//! ettj enrich --input contracts.csv --convention terceira_sexta --output enriched.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up output format and the shared calendar
    let format = cli.format;
    let calendar = commands::load_calendar(cli.calendar.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Expiry(args) => commands::expiry::execute(args, format, &calendar)?,
        Commands::Count(args) => commands::count::execute(args, format, &calendar)?,
        Commands::Enrich(args) => commands::enrich::execute(args, format, &calendar)?,
    }

    Ok(())
}
