//! I Bond tracker CLI.
//!
//! # Usage
//!
//! ```bash
//! # Generate the workbook
//! ibond-tracker generate -o I_Bond_Tracker.xlsx --rates-csv rates.csv
//!
//! # Value a bond twelve months after issue
//! ibond-tracker value --issue 2024-01-15 --amount 1000 --fixed 0.009 --months 12 --rates-csv rates.csv
//!
//! # Project a bond month by month
//! ibond-tracker schedule --issue 2024-01-15 --amount 1000 --fixed 0.009 --months 24 --rates-csv rates.csv
//!
//! # Check the rate table
//! ibond-tracker rates --rates-csv rates.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};
use config::TrackerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so json/csv output stays clean.
    let default_filter = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TrackerConfig::load(cli.config.as_deref())?;
    let (format, quiet) = (cli.format, cli.quiet);

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, format, quiet, &config)?,
        Commands::Value(args) => commands::value::execute(args, format, quiet, &config)?,
        Commands::Schedule(args) => commands::schedule::execute(args, format, quiet, &config)?,
        Commands::Rates(args) => commands::rates::execute(args, format, quiet, &config)?,
    }

    Ok(())
}
