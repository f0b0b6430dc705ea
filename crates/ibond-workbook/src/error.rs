//! Workbook generation errors.

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use ibond_core::TrackerError;

/// Workbook generation result type.
pub type WorkbookResult<T> = Result<T, WorkbookError>;

/// Errors raised while assembling or saving the workbook.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// The spreadsheet writer rejected a cell, table, name or file write.
    #[error("Spreadsheet writer error: {0}")]
    Xlsx(#[from] XlsxError),

    /// Seed data does not fit the layout.
    #[error("{sheet} holds {capacity} rows but {requested} were supplied")]
    Capacity {
        /// Sheet that overflowed.
        sheet: &'static str,
        /// Rows available.
        capacity: u32,
        /// Rows supplied.
        requested: usize,
    },

    /// A seed value cannot be written as a spreadsheet cell.
    #[error("Cannot write {field}: {reason}")]
    InvalidCell {
        /// Which input the value belongs to.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Domain model error.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_display() {
        let err = WorkbookError::Capacity {
            sheet: "Inventory",
            capacity: 100,
            requested: 101,
        };
        assert_eq!(err.to_string(), "Inventory holds 100 rows but 101 were supplied");
    }
}
