//! Data written into the editable tables of a new workbook.

use rust_decimal::Decimal;

use ibond_core::{BondRecord, Date, Portfolio, RateRecord, RateTable, TrackerResult};

/// Initial contents of the Rates and Inventory tables.
#[derive(Debug, Clone)]
pub struct WorkbookSeed {
    /// Announcements for the Rates table.
    pub rates: RateTable,
    /// Bonds for the Inventory table.
    pub portfolio: Portfolio,
}

impl WorkbookSeed {
    /// Creates a seed from explicit tables.
    #[must_use]
    pub fn new(rates: RateTable, portfolio: Portfolio) -> Self {
        Self { rates, portfolio }
    }

    /// Placeholder announcements and one example bond.
    ///
    /// The placeholder rates are zero so a fresh workbook never shows a
    /// value computed from rates the user has not entered.
    pub fn example() -> TrackerResult<Self> {
        Ok(Self::new(placeholder_rates()?, example_portfolio()?))
    }

    /// Replaces the rates, keeping the bonds.
    #[must_use]
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Replaces the bonds, keeping the rates.
    #[must_use]
    pub fn with_portfolio(mut self, portfolio: Portfolio) -> Self {
        self.portfolio = portfolio;
        self
    }
}

/// Zero-rate rows for the three announcement dates after the example issue.
pub fn placeholder_rates() -> TrackerResult<RateTable> {
    [(2024, 5, 1), (2024, 11, 1), (2025, 5, 1)]
        .into_iter()
        .map(|(y, m, d)| Ok(RateRecord::new(Date::from_ymd(y, m, d)?, Decimal::ZERO)))
        .collect::<TrackerResult<Vec<_>>>()
        .map(RateTable::new)
}

/// The `EX-0001` sample bond.
pub fn example_portfolio() -> TrackerResult<Portfolio> {
    Portfolio::new(vec![BondRecord::new(
        "EX-0001",
        "Sample Owner",
        Date::from_ymd(2024, 1, 15)?,
        Decimal::new(100_000, 2),
        Decimal::new(9, 3),
        120,
    )])
}
