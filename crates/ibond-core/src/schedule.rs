//! Month-by-month projection of a single bond.
//!
//! A [`Schedule`] looks up each period's rate once, builds the per-period
//! growth factors and their running product, and then produces rows lazily.
//! Every row reuses the shared prefix product for its period and applies only
//! its own partial factor, mirroring the `SCAN`-based value column on the
//! BondSchedule sheet.
//!
//! Rows for which a period rate is unavailable carry `None` instead of a
//! value, the same way the sheet shows a blank cell.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::accrual::{
    composite_rate, period_growth, round_cents, to_f64, variable_rate_for_period, PeriodPosition,
    PERIOD_MONTHS,
};
use crate::error::{TrackerError, TrackerResult};
use crate::types::{BondTerms, Date, Portfolio, RateTable};

/// One month of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleRow {
    /// Calendar month (issue date plus `month_index` months).
    pub month: Date,
    /// Months since issue.
    pub month_index: u32,
    /// Variable rate of the period containing this month.
    pub variable_rate: Option<Decimal>,
    /// Composite rate of that period.
    pub composite_rate: Option<f64>,
    /// Accrued value, rounded to cents.
    pub value: Option<Decimal>,
}

/// A projection of one bond over `months_to_project + 1` months.
#[derive(Debug, Clone)]
pub struct Schedule {
    terms: BondTerms,
    months_to_project: u32,
    fixed: f64,
    principal: f64,
    period_rates: Vec<Option<Decimal>>,
    growth: Vec<Option<f64>>,
    /// `prefix[k]` is the product of `growth[0..k]`.
    prefix: Vec<Option<f64>>,
}

impl Schedule {
    /// Prepares the projection for months `0..=months_to_project`.
    ///
    /// Periods without an applicable rate are kept as gaps; only invalid
    /// inputs or dates out of range fail.
    pub fn project(
        terms: BondTerms,
        rates: &RateTable,
        months_to_project: u32,
    ) -> TrackerResult<Self> {
        let horizon = i32::try_from(months_to_project).map_err(|_| {
            TrackerError::invalid_input("months_to_project", format!("{months_to_project}"))
        })?;
        terms.issue_date.add_months(horizon)?;

        let fixed = to_f64(terms.fixed_rate, "fixed_rate")?;
        let principal = to_f64(terms.purchase_amount, "purchase_amount")?;

        let last_period = months_to_project / PERIOD_MONTHS;
        let period_rates = (0..=last_period)
            .map(|period| match variable_rate_for_period(&terms, rates, period) {
                Ok(rate) => Ok(Some(rate)),
                Err(TrackerError::MissingRate { .. }) => Ok(None),
                Err(e) => Err(e),
            })
            .collect::<TrackerResult<Vec<_>>>()?;

        let growth: Vec<Option<f64>> = period_rates
            .iter()
            .map(|rate| {
                rate.and_then(|v| v.to_f64())
                    .map(|v| period_growth(fixed, v))
            })
            .collect();

        let prefix = std::iter::once(Some(1.0))
            .chain(growth.iter().scan(Some(1.0), |acc, g| {
                *acc = acc.zip(*g).map(|(a, b)| a * b);
                Some(*acc)
            }))
            .collect();

        let gaps = period_rates.iter().filter(|r| r.is_none()).count();
        if gaps > 0 {
            tracing::debug!(
                issue = %terms.issue_date,
                periods = period_rates.len(),
                gaps,
                "projection has periods without a variable rate"
            );
        }

        Ok(Self {
            terms,
            months_to_project,
            fixed,
            principal,
            period_rates,
            growth,
            prefix,
        })
    }

    /// Projects the bond selected by id, the way the BondSchedule sheet does.
    ///
    /// Returns `None` (no rows) when the id is unknown or the bond is missing
    /// one of its accrual inputs.
    pub fn for_selection(
        portfolio: &Portfolio,
        bond_id: &str,
        rates: &RateTable,
    ) -> TrackerResult<Option<Self>> {
        let Some(bond) = portfolio.find(bond_id) else {
            return Ok(None);
        };
        let Ok(terms) = bond.terms() else {
            return Ok(None);
        };
        Self::project(terms, rates, bond.months_to_project).map(Some)
    }

    /// Terms of the projected bond.
    #[must_use]
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Number of rows (`months_to_project + 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.months_to_project as usize + 1
    }

    /// A schedule always has the issue month.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Computes a single row.
    pub fn row(&self, month_index: u32) -> TrackerResult<ScheduleRow> {
        if month_index > self.months_to_project {
            return Err(TrackerError::invalid_input(
                "month_index",
                format!("{month_index} is past the {} projected months", self.months_to_project),
            ));
        }
        let month = self.terms.issue_date.add_months(month_index as i32)?;
        let position = PeriodPosition::of_month(month_index);
        let k = position.full_periods as usize;

        let variable_rate = self.period_rates[k];
        let composite = variable_rate
            .and_then(|v| v.to_f64())
            .map(|v| composite_rate(self.fixed, v));

        let partial = self.growth[k].map(|g| g.powf(position.partial_exponent()));
        let value = self.prefix[k]
            .zip(partial)
            .and_then(|(full, partial)| round_cents(self.principal * full * partial).ok());

        Ok(ScheduleRow {
            month,
            month_index,
            variable_rate,
            composite_rate: composite,
            value,
        })
    }

    /// Lazily yields every row in month order.
    pub fn rows(&self) -> impl Iterator<Item = TrackerResult<ScheduleRow>> + '_ {
        (0..=self.months_to_project).map(move |i| self.row(i))
    }
}
