//! Domain types for the tracker.
//!
//! - [`Date`]: Calendar date with spreadsheet-compatible month arithmetic
//! - [`RateRecord`] / [`RateTable`]: Semiannual variable-rate announcements
//! - [`BondRecord`] / [`BondTerms`]: One row of the bond inventory
//! - [`Portfolio`]: The inventory keyed by bond id

mod bond;
mod date;
mod rate;

pub use bond::{BondRecord, BondTerms, Portfolio};
pub use date::Date;
pub use rate::{RateIrregularity, RateRecord, RateTable};
