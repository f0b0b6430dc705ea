//! Bond inventory rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Date;
use crate::error::{TrackerError, TrackerResult};

/// One row of the bond inventory as the user entered it.
///
/// The three inputs the accrual model needs are optional because the
/// inventory sheet allows them to be left blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRecord {
    /// User-chosen identifier, unique within the inventory.
    #[serde(alias = "BondID")]
    pub bond_id: String,
    /// Registered owner.
    #[serde(default, alias = "Owner")]
    pub owner: String,
    /// Issue date (any day in the issue month).
    #[serde(default, alias = "IssueDate")]
    pub issue_date: Option<Date>,
    /// Amount paid.
    #[serde(default, alias = "PurchaseAmount")]
    pub purchase_amount: Option<Decimal>,
    /// Fixed rate locked at issue, as a decimal.
    #[serde(default, alias = "FixedRate")]
    pub fixed_rate: Option<Decimal>,
    /// Number of months the schedule view projects.
    #[serde(default, alias = "MonthsToProject")]
    pub months_to_project: u32,
}

impl BondRecord {
    /// Creates a fully specified bond.
    #[must_use]
    pub fn new(
        bond_id: impl Into<String>,
        owner: impl Into<String>,
        issue_date: Date,
        purchase_amount: Decimal,
        fixed_rate: Decimal,
        months_to_project: u32,
    ) -> Self {
        Self {
            bond_id: bond_id.into(),
            owner: owner.into(),
            issue_date: Some(issue_date),
            purchase_amount: Some(purchase_amount),
            fixed_rate: Some(fixed_rate),
            months_to_project,
        }
    }

    /// Resolves the accrual inputs.
    ///
    /// # Errors
    ///
    /// `TrackerError::MissingInput` names the first blank input, in the order
    /// issue date, purchase amount, fixed rate.
    pub fn terms(&self) -> TrackerResult<BondTerms> {
        let issue_date = self
            .issue_date
            .ok_or(TrackerError::MissingInput { field: "issue_date" })?;
        let purchase_amount = self.purchase_amount.ok_or(TrackerError::MissingInput {
            field: "purchase_amount",
        })?;
        let fixed_rate = self
            .fixed_rate
            .ok_or(TrackerError::MissingInput { field: "fixed_rate" })?;
        Ok(BondTerms::new(issue_date, purchase_amount, fixed_rate))
    }

    /// Whole months held as of `as_of`, or `None` if any input is blank or
    /// the bond is not yet issued.
    #[must_use]
    pub fn months_held(&self, as_of: Date) -> Option<u32> {
        let terms = self.terms().ok()?;
        terms.issue_date.months_until(&as_of)
    }
}

/// The inputs the accrual model needs for one bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Issue date; periods start here.
    pub issue_date: Date,
    /// Amount paid.
    pub purchase_amount: Decimal,
    /// Fixed rate locked at issue.
    pub fixed_rate: Decimal,
}

impl BondTerms {
    /// Creates bond terms.
    #[must_use]
    pub fn new(issue_date: Date, purchase_amount: Decimal, fixed_rate: Decimal) -> Self {
        Self {
            issue_date,
            purchase_amount,
            fixed_rate,
        }
    }
}

/// The bond inventory, keyed by bond id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Portfolio {
    bonds: Vec<BondRecord>,
}

impl Portfolio {
    /// Creates a portfolio, rejecting repeated bond ids.
    pub fn new(bonds: Vec<BondRecord>) -> TrackerResult<Self> {
        let mut seen = HashSet::with_capacity(bonds.len());
        for bond in &bonds {
            if !seen.insert(bond.bond_id.as_str()) {
                return Err(TrackerError::DuplicateBond {
                    bond_id: bond.bond_id.clone(),
                });
            }
        }
        Ok(Self { bonds })
    }

    /// Exact-key lookup, like the schedule sheet's `XLOOKUP` on BondID.
    #[must_use]
    pub fn find(&self, bond_id: &str) -> Option<&BondRecord> {
        self.bonds.iter().find(|b| b.bond_id == bond_id)
    }

    /// The bonds in entry order.
    #[must_use]
    pub fn bonds(&self) -> &[BondRecord] {
        &self.bonds
    }

    /// Number of bonds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    /// Returns true if there are no bonds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}
