//! CSV loaders for rates and bonds.
//!
//! Headers may use either the snake_case field names or the column names of
//! the generated sheets (`EffDate`, `VariableRate`, `BondID`, ...), so a
//! table copied out of the workbook can be fed back in.

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use ibond_core::{BondRecord, Date, Portfolio, RateRecord, RateTable};

use crate::error::{CliError, CliResult};

#[derive(Debug, Deserialize)]
struct BondRow {
    #[serde(alias = "BondID")]
    bond_id: String,
    #[serde(default, alias = "Owner")]
    owner: String,
    #[serde(default, alias = "IssueDate")]
    issue_date: Option<Date>,
    #[serde(default, alias = "PurchaseAmount")]
    purchase_amount: Option<Decimal>,
    #[serde(default, alias = "FixedRate")]
    fixed_rate: Option<Decimal>,
    #[serde(default, alias = "MonthsToProject")]
    months_to_project: Option<u32>,
}

impl From<BondRow> for BondRecord {
    fn from(row: BondRow) -> Self {
        Self {
            bond_id: row.bond_id,
            owner: row.owner,
            issue_date: row.issue_date,
            purchase_amount: row.purchase_amount,
            fixed_rate: row.fixed_rate,
            months_to_project: row.months_to_project.unwrap_or(0),
        }
    }
}

/// Reads a rates CSV file.
pub fn load_rates(path: &Path) -> CliResult<RateTable> {
    let file = std::fs::File::open(path)?;
    let table = read_rates(file).map_err(|reason| CliError::Input {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::debug!(path = %path.display(), rows = table.len(), "rates loaded");
    Ok(table)
}

/// Reads a bonds CSV file.
pub fn load_bonds(path: &Path) -> CliResult<Portfolio> {
    let file = std::fs::File::open(path)?;
    let bonds = read_bonds(file).map_err(|reason| CliError::Input {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::debug!(path = %path.display(), rows = bonds.len(), "bonds loaded");
    Ok(Portfolio::new(bonds)?)
}

fn read_rates(reader: impl Read) -> Result<RateTable, String> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<RateRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map(RateTable::new)
        .map_err(|e| e.to_string())
}

fn read_bonds(reader: impl Read) -> Result<Vec<BondRecord>, String> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<BondRow>()
        .map(|row| row.map(BondRecord::from).map_err(|e| e.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rates_sorts() {
        let csv = "effective_date,variable_rate\n2024-11-01,0.0390\n2024-05-01,0.0490\n";
        let table = read_rates(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.records()[0].effective_date,
            Date::from_ymd(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_read_rates_sheet_headers() {
        let csv = "EffDate,VariableRate\n2023-11-01,0.043\n";
        let table = read_rates(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_read_rates_rejects_bad_date() {
        let csv = "effective_date,variable_rate\n11/01/2023,0.043\n";
        assert!(read_rates(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_read_bonds_with_blanks() {
        let csv = "bond_id,owner,issue_date,purchase_amount,fixed_rate,months_to_project\n\
                   A,Alice,2024-01-15,1000,0.009,120\n\
                   B,,,500,,\n";
        let bonds = read_bonds(csv.as_bytes()).unwrap();
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds[0].months_to_project, 120);
        assert!(bonds[0].terms().is_ok());
        assert_eq!(bonds[1].issue_date, None);
        assert_eq!(bonds[1].fixed_rate, None);
        assert_eq!(bonds[1].months_to_project, 0);
        assert!(bonds[1].terms().unwrap_err().is_blank_result());
    }
}
