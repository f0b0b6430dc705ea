//! # I Bond Workbook
//!
//! Generates the I Bond tracker spreadsheet.
//!
//! The workbook has four sheets, in tab order:
//!
//! - **Instructions**: static guidance
//! - **Inventory**: the bond table (`tblBonds`) with MonthsHeld and
//!   CurrentValue formulas
//! - **Rates**: the variable-rate announcements (`tblRates`)
//! - **BondSchedule**: a month-by-month projection of one selected bond
//!
//! All of the accrual logic lives in spreadsheet formulas assembled by
//! [`formula`]; they evaluate the same model as [`ibond_core::accrual`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibond_workbook::{TrackerWorkbook, WorkbookSeed};
//!
//! let seed = WorkbookSeed::example().unwrap();
//! TrackerWorkbook::new(seed).save("I_Bond_Tracker.xlsx").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod formats;
pub mod formula;
pub mod layout;
pub mod seed;
pub mod sheets;
pub mod workbook;

pub use error::{WorkbookError, WorkbookResult};
pub use layout::WorkbookLayout;
pub use seed::WorkbookSeed;
pub use workbook::TrackerWorkbook;
