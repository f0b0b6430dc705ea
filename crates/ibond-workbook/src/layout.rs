//! Sheet, table and name layout shared by the builders and formulas.
//!
//! Every cell address used by a formula is derived from here so the
//! builders and the formula text cannot drift apart.

/// Instructions sheet name.
pub const INSTRUCTIONS_SHEET: &str = "Instructions";
/// Inventory sheet name.
pub const INVENTORY_SHEET: &str = "Inventory";
/// Rates sheet name.
pub const RATES_SHEET: &str = "Rates";
/// Schedule sheet name.
pub const SCHEDULE_SHEET: &str = "BondSchedule";

/// Tab order of the saved workbook.
pub const TAB_ORDER: [&str; 4] = [INSTRUCTIONS_SHEET, INVENTORY_SHEET, RATES_SHEET, SCHEDULE_SHEET];

/// Rates table name.
pub const RATES_TABLE: &str = "tblRates";
/// Inventory table name.
pub const BONDS_TABLE: &str = "tblBonds";

/// Workbook-level defined names.
pub mod names {
    /// Rates!EffDate data cells.
    pub const RATE_DATES: &str = "RateEffDates";
    /// Rates!VariableRate data cells.
    pub const RATE_VALUES: &str = "RateVariableRates";
    /// Inventory!BondID data cells.
    pub const BOND_IDS: &str = "BondIDs";
    /// Inventory!IssueDate data cells.
    pub const BOND_ISSUE_DATES: &str = "BondIssueDates";
    /// Inventory!PurchaseAmount data cells.
    pub const BOND_AMOUNTS: &str = "BondPurchaseAmounts";
    /// Inventory!FixedRate data cells.
    pub const BOND_FIXED_RATES: &str = "BondFixedRates";
    /// Inventory!MonthsToProject data cells.
    pub const BOND_MONTHS: &str = "BondMonthsToProject";
}

/// Rates table headers.
pub const RATES_HEADERS: [&str; 2] = ["EffDate", "VariableRate"];

/// Rates columns.
pub mod rates_col {
    #![allow(missing_docs)]
    pub const EFF_DATE: u16 = 0;
    pub const VARIABLE_RATE: u16 = 1;
}

/// Inventory table headers.
pub const INVENTORY_HEADERS: [&str; 8] = [
    "BondID",
    "Owner",
    "IssueDate",
    "PurchaseAmount",
    "FixedRate",
    "MonthsToProject",
    "MonthsHeld",
    "CurrentValue",
];

/// Inventory columns.
pub mod inventory_col {
    #![allow(missing_docs)]
    pub const BOND_ID: u16 = 0;
    pub const OWNER: u16 = 1;
    pub const ISSUE_DATE: u16 = 2;
    pub const PURCHASE_AMOUNT: u16 = 3;
    pub const FIXED_RATE: u16 = 4;
    pub const MONTHS_TO_PROJECT: u16 = 5;
    pub const MONTHS_HELD: u16 = 6;
    pub const CURRENT_VALUE: u16 = 7;
}

/// BondSchedule headers (row 8).
pub const SCHEDULE_HEADERS: [&str; 5] = ["Month", "MonthIndex", "VariableRate", "CompositeRate", "Value"];

/// Fixed cell positions on the BondSchedule sheet (zero-based).
pub mod schedule_cell {
    /// `A1` label / `B1` selector.
    pub const SELECTOR: (u32, u16) = (0, 1);
    /// First resolved field row (`B3`).
    pub const FIRST_RESOLVED_ROW: u32 = 2;
    /// Header row (`A8`).
    pub const HEADER_ROW: u32 = 7;
    /// Row the spilled formulas are anchored in (`A9`).
    pub const SPILL_ROW: u32 = 8;
}

/// Labels of the resolved fields in `A3:A6`.
pub const SCHEDULE_LABELS: [&str; 4] = ["IssueDate", "PurchaseAmount", "FixedRate", "MonthsToProject"];

/// Row capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkbookLayout {
    /// Data rows in the Inventory table.
    pub inventory_rows: u32,
    /// Minimum size of the Rates table including its header.
    pub rates_rows: u32,
    /// Empty rows kept below the seeded rates.
    pub rates_headroom: u32,
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        Self {
            inventory_rows: 100,
            rates_rows: 100,
            rates_headroom: 20,
        }
    }
}

impl WorkbookLayout {
    /// Last Rates row (one-based) for a table seeded with `seeded` records.
    #[must_use]
    pub fn rates_last_row(&self, seeded: usize) -> u32 {
        let wanted = u32::try_from(seeded)
            .unwrap_or(u32::MAX)
            .saturating_add(self.rates_headroom);
        self.rates_rows.max(wanted).max(2)
    }

    /// Last Inventory row (one-based).
    #[must_use]
    pub fn inventory_last_row(&self) -> u32 {
        self.inventory_rows.max(1) + 1
    }

    /// Absolute reference to data rows of one Inventory column.
    #[must_use]
    pub fn inventory_range(&self, col: u16) -> String {
        sheet_range(INVENTORY_SHEET, col, 2, self.inventory_last_row())
    }
}

/// Column letters for a zero-based column index.
#[must_use]
pub fn column_name(col: u16) -> String {
    let mut n = u32::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Relative A1 reference (`row` is one-based).
#[must_use]
pub fn a1(col: u16, row: u32) -> String {
    format!("{}{}", column_name(col), row)
}

/// Absolute A1 reference (`row` is one-based).
#[must_use]
pub fn abs(col: u16, row: u32) -> String {
    format!("${}${}", column_name(col), row)
}

/// `=table[column]` formula text for a defined name. The reference follows
/// the table when rows are appended below it.
#[must_use]
pub fn table_column(table: &str, header: &str) -> String {
    format!("={table}[{header}]")
}

/// `=Sheet!$X$first:$X$last` formula text for a defined name.
#[must_use]
pub fn sheet_range(sheet: &str, col: u16, first: u32, last: u32) -> String {
    format!("={}!{}:{}", sheet, abs(col, first), abs(col, last))
}
