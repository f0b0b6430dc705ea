//! Derived Inventory columns.

use super::accrual::accrued_value;
use super::expr::{if_any_blank, iferror_blank};
use crate::layout::{a1, inventory_col};

struct RowInputs {
    issue: String,
    amount: String,
    fixed: String,
}

impl RowInputs {
    fn of(row: u32) -> Self {
        Self {
            issue: a1(inventory_col::ISSUE_DATE, row),
            amount: a1(inventory_col::PURCHASE_AMOUNT, row),
            fixed: a1(inventory_col::FIXED_RATE, row),
        }
    }

    fn guard(&self, expr: &str) -> String {
        format!(
            "={}",
            if_any_blank(&[&self.issue, &self.amount, &self.fixed], &iferror_blank(expr))
        )
    }
}

/// MonthsHeld for a one-based sheet row.
#[must_use]
pub fn months_held(row: u32) -> String {
    let inputs = RowInputs::of(row);
    inputs.guard(&format!("DATEDIF({},TODAY(),\"m\")", inputs.issue))
}

/// CurrentValue for a one-based sheet row.
#[must_use]
pub fn current_value(row: u32) -> String {
    let inputs = RowInputs::of(row);
    inputs.guard(&accrued_value(
        &inputs.issue,
        &inputs.amount,
        &inputs.fixed,
        "DATEDIF(issue,TODAY(),\"m\")",
    ))
}
