//! Tracker configuration.
//!
//! ```toml
//! output_path = "I_Bond_Tracker.xlsx"
//! rates_rows = 100
//! inventory_rows = 100
//!
//! [[rates]]
//! effective_date = "2023-11-01"
//! variable_rate = 0.0430
//!
//! [[bonds]]
//! bond_id = "EX-0001"
//! owner = "Sample Owner"
//! issue_date = "2024-01-15"
//! purchase_amount = 1000.00
//! fixed_rate = 0.009
//! months_to_project = 120
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ibond_core::{BondRecord, RateRecord};
use ibond_workbook::WorkbookLayout;

use crate::error::{CliError, CliResult};

/// Tracker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Where `generate` writes the workbook
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Minimum Rates table size, header included
    #[serde(default = "default_rows")]
    pub rates_rows: u32,

    /// Inventory data rows
    #[serde(default = "default_rows")]
    pub inventory_rows: u32,

    /// Announcements to seed the Rates table with
    #[serde(default)]
    pub rates: Vec<RateRecord>,

    /// Bonds to seed the Inventory table with
    #[serde(default)]
    pub bonds: Vec<BondRecord>,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("I_Bond_Tracker.xlsx")
}

fn default_rows() -> u32 {
    100
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            rates_rows: default_rows(),
            inventory_rows: default_rows(),
            rates: Vec::new(),
            bonds: Vec::new(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|reason| CliError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        if config.inventory_rows == 0 {
            return Err("inventory_rows must be at least 1".into());
        }
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading configuration");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Row capacities for the generated workbook.
    #[must_use]
    pub fn layout(&self) -> WorkbookLayout {
        WorkbookLayout {
            inventory_rows: self.inventory_rows,
            rates_rows: self.rates_rows,
            ..WorkbookLayout::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibond_core::Date;
    use rust_decimal::Decimal;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::from_toml("").unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.output_path, PathBuf::from("I_Bond_Tracker.xlsx"));
        assert_eq!(config.layout(), WorkbookLayout::default());
    }

    #[test]
    fn test_full_file() {
        let config = TrackerConfig::from_toml(
            r#"
            output_path = "out/tracker.xlsx"
            rates_rows = 150
            inventory_rows = 40

            [[rates]]
            effective_date = "2024-05-01"
            variable_rate = 0.049

            [[rates]]
            EffDate = "2023-11-01"
            VariableRate = 0.043

            [[bonds]]
            bond_id = "B-1"
            issue_date = "2024-01-15"
            purchase_amount = 1000.0
            fixed_rate = 0.009
            months_to_project = 24
            "#,
        )
        .unwrap();

        assert_eq!(config.output_path, PathBuf::from("out/tracker.xlsx"));
        assert_eq!(config.layout().rates_rows, 150);
        assert_eq!(config.layout().inventory_rows, 40);
        assert_eq!(config.rates.len(), 2);
        assert_eq!(config.rates[1].effective_date, Date::from_ymd(2023, 11, 1).unwrap());
        assert_eq!(config.bonds[0].owner, "");
        assert_eq!(config.bonds[0].purchase_amount, Some(Decimal::new(1000, 0)));
    }

    #[test]
    fn test_rejects_zero_inventory() {
        assert!(TrackerConfig::from_toml("inventory_rows = 0").is_err());
    }

    #[test]
    fn test_unknown_type_is_reported() {
        let err = TrackerConfig::from_toml("rates_rows = \"many\"").unwrap_err();
        assert!(err.contains("rates_rows"));
    }
}
