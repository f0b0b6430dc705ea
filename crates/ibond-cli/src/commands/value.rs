//! Value command implementation.
//!
//! Values one bond with the native accrual model, either a given number of
//! months after issue or as of a date.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use ibond_core::accrual::{self, PeriodPosition};
use ibond_core::{BondRecord, BondTerms, Date, TrackerError};

use crate::cli::OutputFormat;
use crate::commands::{parse_date, report_irregularities, resolve_rates};
use crate::config::TrackerConfig;
use crate::output::{dollars, percent, percent_f64, print_metrics, Metric};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Issue date (YYYY-MM-DD)
    #[arg(long)]
    pub issue: String,

    /// Purchase amount in dollars
    #[arg(long)]
    pub amount: Decimal,

    /// Fixed rate as a decimal (0.009 for 0.90%)
    #[arg(long)]
    pub fixed: Decimal,

    /// Months since issue
    #[arg(long, group = "horizon")]
    pub months: Option<u32>,

    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, group = "horizon")]
    pub as_of: Option<String>,

    /// CSV file with effective_date,variable_rate rows
    #[arg(long)]
    pub rates_csv: Option<PathBuf>,
}

/// Execute the value command.
pub fn execute(args: ValueArgs, format: OutputFormat, quiet: bool, config: &TrackerConfig) -> Result<()> {
    let issue = parse_date(&args.issue)?;
    let terms = BondTerms::new(issue, args.amount, args.fixed);
    let rates = resolve_rates(args.rates_csv.as_deref(), config)?;
    report_irregularities(&rates, quiet);

    let (months, value) = match args.months {
        Some(months) => (months, accrual::value_at(&terms, &rates, months)?),
        None => {
            let as_of = args
                .as_of
                .as_deref()
                .map(parse_date)
                .transpose()?
                .unwrap_or_else(Date::today);
            let bond = BondRecord::new("", "", issue, args.amount, args.fixed, 0);
            let months = bond.months_held(as_of).ok_or_else(|| {
                TrackerError::invalid_date(format!("{as_of} is before issue date {issue}"))
            })?;
            (months, accrual::current_value(&bond, &rates, as_of)?)
        }
    };
    tracing::debug!(%issue, months, %value, "bond valued");

    let position = PeriodPosition::of_month(months);
    let period_rate = accrual::variable_rate_for_period(&terms, &rates, position.full_periods).ok();

    let mut rows = vec![
        Metric::new("Issue Date", issue.to_string()),
        Metric::new("Purchase Amount", dollars(args.amount)),
        Metric::new("Fixed Rate", percent(args.fixed)),
        Metric::new("Months Held", months.to_string()),
        Metric::new("Full Periods", position.full_periods.to_string()),
        Metric::new("Months Into Period", position.months_into_period.to_string()),
    ];
    if let Some(rate) = period_rate {
        rows.push(Metric::new("Period Variable Rate", percent(rate)));
        if let (Some(f), Some(v)) = (args.fixed.to_f64(), rate.to_f64()) {
            rows.push(Metric::new(
                "Composite Rate",
                percent_f64(accrual::composite_rate(f, v)),
            ));
        }
    }
    rows.push(Metric::new("Value", value.to_string()));

    print_metrics("Accrued Value", &rows, format)
}
