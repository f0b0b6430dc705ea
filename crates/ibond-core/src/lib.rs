//! # I Bond Core
//!
//! Domain types and the accrual model behind the I Bond tracker workbook.
//!
//! - **Types**: [`Date`], [`RateRecord`], [`RateTable`], [`BondRecord`], [`Portfolio`]
//! - **Accrual**: composite rate, six-month period growth and partial-period
//!   interpolation ([`accrual`])
//! - **Schedule**: month-by-month projection of a single bond ([`schedule`])
//!
//! The spreadsheet formulas emitted by `ibond-workbook` encode exactly the
//! model implemented here, so this crate is the executable reference for
//! what the workbook computes.
//!
//! ## Example
//!
//! ```rust
//! use ibond_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let rates = RateTable::new(vec![
//!     RateRecord::new(Date::from_ymd(2023, 11, 1).unwrap(), dec!(0.0430)),
//!     RateRecord::new(Date::from_ymd(2024, 5, 1).unwrap(), dec!(0.0490)),
//! ]);
//! let terms = BondTerms::new(Date::from_ymd(2024, 1, 15).unwrap(), dec!(1000), dec!(0.009));
//!
//! assert_eq!(accrual::value_at(&terms, &rates, 0).unwrap(), dec!(1000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod accrual;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrual;
    pub use crate::error::{TrackerError, TrackerResult};
    pub use crate::schedule::{Schedule, ScheduleRow};
    pub use crate::types::{
        BondRecord, BondTerms, Date, Portfolio, RateIrregularity, RateRecord, RateTable,
    };
}

// Re-export commonly used types at crate root
pub use error::{TrackerError, TrackerResult};
pub use schedule::{Schedule, ScheduleRow};
pub use types::{BondRecord, BondTerms, Date, Portfolio, RateRecord, RateTable};
