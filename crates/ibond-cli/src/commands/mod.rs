//! CLI command implementations.

pub mod generate;
pub mod rates;
pub mod schedule;
pub mod value;

pub use generate::GenerateArgs;
pub use rates::RatesArgs;
pub use schedule::ScheduleArgs;
pub use value::ValueArgs;

use std::path::Path;

use ibond_core::{Date, Portfolio, RateTable};

use crate::config::TrackerConfig;
use crate::error::{CliError, CliResult};
use crate::input::{load_bonds, load_rates};
use crate::output::print_caution;

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Rate table from a CSV file, else from the configuration.
pub fn resolve_rates(csv: Option<&Path>, config: &TrackerConfig) -> CliResult<RateTable> {
    match csv {
        Some(path) => load_rates(path),
        None => Ok(RateTable::new(config.rates.clone())),
    }
}

/// Portfolio from a CSV file, else from the configuration.
pub fn resolve_portfolio(csv: Option<&Path>, config: &TrackerConfig) -> CliResult<Portfolio> {
    match csv {
        Some(path) => load_bonds(path),
        None => Ok(Portfolio::new(config.bonds.clone())?),
    }
}

/// Logs and prints rate table irregularities. Returns how many were found.
pub fn report_irregularities(rates: &RateTable, quiet: bool) -> usize {
    let issues = rates.irregularities();
    for issue in &issues {
        tracing::warn!(%issue, "rate table irregularity");
        if !quiet {
            print_caution(&format!("Rate table: {issue}"));
        }
    }
    issues.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-15").unwrap(), Date::from_ymd(2024, 1, 15).unwrap());
        assert!(matches!(parse_date("15/01/2024"), Err(CliError::InvalidDate(_))));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_resolve_from_config() {
        let config = TrackerConfig::default();
        assert!(resolve_rates(None, &config).unwrap().is_empty());
        assert!(resolve_portfolio(None, &config).unwrap().is_empty());
    }
}
