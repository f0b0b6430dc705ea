//! Schedule command implementation.
//!
//! Projects a bond month by month, either from explicit terms or by
//! selecting a bond id from the configured or CSV inventory (the way the
//! BondSchedule sheet's selector does).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use ibond_core::{BondTerms, Schedule, ScheduleRow};

use crate::cli::OutputFormat;
use crate::commands::{parse_date, report_irregularities, resolve_portfolio, resolve_rates};
use crate::config::TrackerConfig;
use crate::output::{percent, percent_f64, print_rows};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Bond id to select from the inventory
    #[arg(long, conflicts_with_all = ["issue", "amount", "fixed"])]
    pub bond: Option<String>,

    /// Issue date (YYYY-MM-DD)
    #[arg(long, required_unless_present = "bond")]
    pub issue: Option<String>,

    /// Purchase amount in dollars
    #[arg(long, required_unless_present = "bond")]
    pub amount: Option<Decimal>,

    /// Fixed rate as a decimal
    #[arg(long, required_unless_present = "bond")]
    pub fixed: Option<Decimal>,

    /// Months to project
    #[arg(long, default_value = "120")]
    pub months: u32,

    /// CSV file with effective_date,variable_rate rows
    #[arg(long)]
    pub rates_csv: Option<PathBuf>,

    /// CSV file with inventory rows (used with --bond)
    #[arg(long)]
    pub bonds_csv: Option<PathBuf>,
}

/// One projected month for display. Blank cells stay blank.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleLine {
    #[tabled(rename = "Month")]
    pub month: String,
    #[tabled(rename = "MonthIndex")]
    pub month_index: u32,
    #[tabled(rename = "VariableRate")]
    pub variable_rate: String,
    #[tabled(rename = "CompositeRate")]
    pub composite_rate: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl From<ScheduleRow> for ScheduleLine {
    fn from(row: ScheduleRow) -> Self {
        Self {
            month: row.month.to_string(),
            month_index: row.month_index,
            variable_rate: row.variable_rate.map(percent).unwrap_or_default(),
            composite_rate: row.composite_rate.map(percent_f64).unwrap_or_default(),
            value: row.value.map(|v| format!("{v:.2}")).unwrap_or_default(),
        }
    }
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, format: OutputFormat, quiet: bool, config: &TrackerConfig) -> Result<()> {
    let rates = resolve_rates(args.rates_csv.as_deref(), config)?;
    report_irregularities(&rates, quiet);

    let schedule = match (&args.bond, args.issue.as_deref(), args.amount, args.fixed) {
        (Some(bond_id), ..) => {
            let portfolio = resolve_portfolio(args.bonds_csv.as_deref(), config)?;
            Schedule::for_selection(&portfolio, bond_id, &rates)?
        }
        (None, Some(issue), Some(amount), Some(fixed)) => {
            let terms = BondTerms::new(parse_date(issue)?, amount, fixed);
            Some(Schedule::project(terms, &rates, args.months)?)
        }
        _ => anyhow::bail!("schedule needs --bond or all of --issue, --amount and --fixed"),
    };

    let lines: Vec<ScheduleLine> = match &schedule {
        Some(schedule) => schedule
            .rows()
            .map(|row| row.map(ScheduleLine::from))
            .collect::<Result<_, _>>()?,
        None => {
            tracing::info!(bond = ?args.bond, "no bond selected, schedule is empty");
            Vec::new()
        }
    };

    print_rows("Bond Schedule", &lines, format)
}
