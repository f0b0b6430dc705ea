//! Command-line surface of `ibond-tracker`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{GenerateArgs, RatesArgs, ScheduleArgs, ValueArgs};

/// Builds the I Bond tracking workbook and values bonds without a spreadsheet
#[derive(Parser)]
#[command(name = "ibond-tracker", version, about, propagate_version = true)]
pub struct Cli {
    /// How results are printed
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Only print results; drop status lines and lower logging to warn
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML file with output path, table sizes, rates and bonds
    #[arg(short, long, global = true, env = "IBOND_TRACKER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the tracker workbook
    Generate(GenerateArgs),

    /// Value a single bond at a month or date
    Value(ValueArgs),

    /// Project a bond month by month
    Schedule(ScheduleArgs),

    /// List the rate table and its irregularities
    Rates(RatesArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    /// Headline figure only, for scripts
    Minimal,
}
