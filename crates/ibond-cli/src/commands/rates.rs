//! Rates command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use ibond_core::RateRecord;

use crate::cli::OutputFormat;
use crate::commands::{report_irregularities, resolve_rates};
use crate::config::TrackerConfig;
use crate::output::{percent, print_rows};

/// Arguments for the rates command.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// CSV file with effective_date,variable_rate rows
    #[arg(long)]
    pub rates_csv: Option<PathBuf>,
}

/// One announcement for display.
#[derive(Debug, Serialize, Tabled)]
pub struct RateLine {
    #[tabled(rename = "EffDate")]
    pub effective_date: String,
    #[tabled(rename = "VariableRate")]
    pub variable_rate: String,
}

impl From<&RateRecord> for RateLine {
    fn from(record: &RateRecord) -> Self {
        Self {
            effective_date: record.effective_date.to_string(),
            variable_rate: percent(record.variable_rate),
        }
    }
}

/// Execute the rates command.
pub fn execute(args: RatesArgs, format: OutputFormat, quiet: bool, config: &TrackerConfig) -> Result<()> {
    let rates = resolve_rates(args.rates_csv.as_deref(), config)?;
    let lines: Vec<RateLine> = rates.iter().map(RateLine::from).collect();

    print_rows("Variable Rate Announcements", &lines, format)?;
    report_irregularities(&rates, quiet);
    Ok(())
}
