//! Formula text for the generated sheets.
//!
//! - [`expr`]: `LET`/`LAMBDA` builders and parameter qualification
//! - [`accrual`]: the accrual model as spreadsheet expressions
//! - [`inventory`]: per-row MonthsHeld and CurrentValue
//! - [`schedule`]: the BondSchedule selector and spilled columns
//!
//! Builders return formulas with a leading `=`; the helpers they are made
//! of return bare expressions.

pub mod accrual;
pub mod expr;
pub mod inventory;
pub mod schedule;

pub use expr::{if_any_blank, iferror_blank, is_balanced, lambda, qualify, Let, PARAM_PREFIX};
