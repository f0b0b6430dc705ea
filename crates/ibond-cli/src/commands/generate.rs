//! Generate command implementation.
//!
//! Builds the tracker workbook and writes it to disk.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use ibond_workbook::seed::{example_portfolio, placeholder_rates};
use ibond_workbook::{TrackerWorkbook, WorkbookSeed};

use crate::cli::OutputFormat;
use crate::commands::{report_irregularities, resolve_portfolio, resolve_rates};
use crate::config::TrackerConfig;
use crate::output::{print_done, print_metrics, Metric};

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output path. Defaults to the configured path.
    #[arg(short, long, env = "IBOND_TRACKER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// CSV file with effective_date,variable_rate rows
    #[arg(long)]
    pub rates_csv: Option<PathBuf>,

    /// CSV file with bond_id,owner,issue_date,purchase_amount,fixed_rate,months_to_project rows
    #[arg(long)]
    pub bonds_csv: Option<PathBuf>,
}

/// Execute the generate command.
pub fn execute(args: GenerateArgs, format: OutputFormat, quiet: bool, config: &TrackerConfig) -> Result<()> {
    let output = args.output.unwrap_or_else(|| config.output_path.clone());

    // Empty inputs fall back to the placeholder rates and the sample bond.
    let mut rates = resolve_rates(args.rates_csv.as_deref(), config)?;
    if rates.is_empty() {
        rates = placeholder_rates()?;
    }
    let mut portfolio = resolve_portfolio(args.bonds_csv.as_deref(), config)?;
    if portfolio.is_empty() {
        portfolio = example_portfolio()?;
    }
    report_irregularities(&rates, quiet);

    let rate_count = rates.len();
    let bond_count = portfolio.len();
    let workbook = TrackerWorkbook::new(WorkbookSeed::new(rates, portfolio)).with_layout(config.layout());
    workbook.save(&output)?;

    if quiet {
        return Ok(());
    }
    let path = output.display().to_string();
    match format {
        OutputFormat::Table => print_done(&format!(
            "Wrote {path} ({rate_count} rates, {bond_count} bonds)"
        )),
        _ => print_metrics(
            "Workbook",
            &[
                Metric::new("Rates", rate_count.to_string()),
                Metric::new("Bonds", bond_count.to_string()),
                Metric::new("Output", path),
            ],
            format,
        )?,
    }
    Ok(())
}
