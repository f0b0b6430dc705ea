//! The I Bond accrual model.
//!
//! A bond earns a composite rate that is fixed for each six-month period
//! measured from its issue date. The variable part of that rate is the
//! announcement in effect on the first day of the period. Value compounds
//! semiannually at half the composite rate and is interpolated
//! geometrically inside a period that is still running:
//!
//! ```text
//! composite(f, v) = f + v + f*v
//! growth(f, v)    = 1 + composite(f, v) / 2
//! value(m)        = round(P * prod_{i<k} growth_i * growth_k^(r/6), 2)
//!                   where k = m div 6, r = m mod 6
//! ```
//!
//! The early-redemption penalty (three months of interest for bonds held
//! under five years) is not applied.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{TrackerError, TrackerResult};
use crate::types::{BondRecord, BondTerms, Date, RateTable};

/// Length of a rate period in months.
pub const PERIOD_MONTHS: u32 = 6;

/// Annual composite rate from a fixed and a variable annual rate.
#[must_use]
pub fn composite_rate(fixed: f64, variable: f64) -> f64 {
    fixed + variable + fixed * variable
}

/// Growth factor over one full six-month period.
#[must_use]
pub fn period_growth(fixed: f64, variable: f64) -> f64 {
    1.0 + composite_rate(fixed, variable) / 2.0
}

/// Where a month offset falls relative to the rate periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodPosition {
    /// Periods completed before the month (`m div 6`).
    pub full_periods: u32,
    /// Months into the current period (`m mod 6`).
    pub months_into_period: u32,
}

impl PeriodPosition {
    /// Splits a month offset from issue.
    #[must_use]
    pub const fn of_month(month: u32) -> Self {
        Self {
            full_periods: month / PERIOD_MONTHS,
            months_into_period: month % PERIOD_MONTHS,
        }
    }

    /// Exponent applied to the current period's growth factor.
    #[must_use]
    pub fn partial_exponent(&self) -> f64 {
        f64::from(self.months_into_period) / f64::from(PERIOD_MONTHS)
    }
}

/// First day of a period.
pub fn period_start(terms: &BondTerms, period: u32) -> TrackerResult<Date> {
    let months = period
        .checked_mul(PERIOD_MONTHS)
        .and_then(|m| i32::try_from(m).ok())
        .ok_or_else(|| TrackerError::invalid_input("period", format!("{period} is too large")))?;
    terms.issue_date.add_months(months)
}

/// Variable rate that applies during a period.
///
/// # Errors
///
/// `TrackerError::MissingRate` when nothing is effective on or before the
/// period start.
pub fn variable_rate_for_period(
    terms: &BondTerms,
    rates: &RateTable,
    period: u32,
) -> TrackerResult<Decimal> {
    let target = period_start(terms, period)?;
    rates
        .rate_on(target)
        .map(|record| record.variable_rate)
        .ok_or(TrackerError::MissingRate { period, target })
}

/// Growth factor of one period for this bond.
pub fn growth_for_period(terms: &BondTerms, rates: &RateTable, period: u32) -> TrackerResult<f64> {
    let fixed = to_f64(terms.fixed_rate, "fixed_rate")?;
    let variable = to_f64(variable_rate_for_period(terms, rates, period)?, "variable_rate")?;
    Ok(period_growth(fixed, variable))
}

/// Value of the bond `month` months after issue, rounded to cents.
///
/// The running period's rate is required even on a period boundary, where
/// it is raised to the power zero.
///
/// # Errors
///
/// `TrackerError::MissingRate` when any period up to and including the
/// running one has no announcement effective on or before its start.
pub fn value_at(terms: &BondTerms, rates: &RateTable, month: u32) -> TrackerResult<Decimal> {
    let position = PeriodPosition::of_month(month);
    let principal = to_f64(terms.purchase_amount, "purchase_amount")?;

    let full_product = (0..position.full_periods).try_fold(1.0, |acc, period| {
        growth_for_period(terms, rates, period).map(|g| acc * g)
    })?;

    let partial =
        growth_for_period(terms, rates, position.full_periods)?.powf(position.partial_exponent());

    round_cents(principal * full_product * partial)
}

/// Value of an inventory row on `as_of` (the Inventory sheet's CurrentValue).
///
/// # Errors
///
/// `MissingInput` for blank inputs, `InvalidDate` when `as_of` is before the
/// issue date, `MissingRate` for rate table gaps.
pub fn current_value(bond: &BondRecord, rates: &RateTable, as_of: Date) -> TrackerResult<Decimal> {
    let terms = bond.terms()?;
    let months = terms.issue_date.months_until(&as_of).ok_or_else(|| {
        TrackerError::invalid_date(format!(
            "{as_of} is before issue date {}",
            terms.issue_date
        ))
    })?;
    value_at(&terms, rates, months)
}

/// Rounds to cents, halves away from zero (spreadsheet `ROUND(x, 2)`).
pub fn round_cents(raw: f64) -> TrackerResult<Decimal> {
    Decimal::from_f64(raw)
        .map(|value| value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| TrackerError::invalid_input("value", format!("{raw} is not representable")))
}

pub(crate) fn to_f64(value: Decimal, field: &'static str) -> TrackerResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| TrackerError::invalid_input(field, format!("{value} is out of range")))
}
