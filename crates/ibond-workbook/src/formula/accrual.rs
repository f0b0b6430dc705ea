//! The accrual model written as spreadsheet expressions.
//!
//! These mirror `ibond_core::accrual` term for term. Rate lookups go
//! through the `RateEffDates`/`RateVariableRates` names with approximate
//! `MATCH`, which finds the latest announcement on or before a date in an
//! ascending table and fails (rather than returning zero) when every
//! announcement is later.

use ibond_core::accrual::PERIOD_MONTHS;

use super::expr::Let;
use crate::layout::names;

/// `fixed + variable + fixed*variable`.
#[must_use]
pub fn composite(fixed: &str, variable: &str) -> String {
    format!("{fixed}+{variable}+{fixed}*{variable}")
}

/// `(1 + composite/2)`, the growth over one full period.
#[must_use]
pub fn growth(fixed: &str, variable: &str) -> String {
    format!("(1+({})/2)", composite(fixed, variable))
}

/// Variable rate in effect on `date` (scalar or array).
#[must_use]
pub fn rate_on(date: &str) -> String {
    format!(
        "INDEX({},MATCH({},{},1))",
        names::RATE_VALUES,
        date,
        names::RATE_DATES
    )
}

/// First day of `period` (scalar or array) for a bond issued on `issue`.
#[must_use]
pub fn period_start(issue: &str, period: &str) -> String {
    format!("EDATE({issue},{PERIOD_MONTHS}*{period})")
}

/// Rounded value of a bond `months` months after issue.
///
/// The running period's rate is always looked up, even on a period boundary
/// where its exponent is zero, so a missing announcement is an error (and a
/// blank cell) rather than a silent pass-through of the principal.
#[must_use]
pub fn accrued_value(issue: &str, principal: &str, fixed: &str, months: &str) -> String {
    let full_product = Let::new()
        .bind(
            "varVec",
            rate_on(&period_start("issue", "SEQUENCE(fullPeriods,1,0,1)")),
        )
        .body(format!("PRODUCT{}", growth("fixed", "varVec")));

    let partial = Let::new()
        .bind("lastVar", rate_on(&period_start("issue", "fullPeriods")))
        .body(format!(
            "{}^(monthsIn/{PERIOD_MONTHS})",
            growth("fixed", "lastVar")
        ));

    Let::new()
        .bind("issue", issue)
        .bind("principal", principal)
        .bind("fixed", fixed)
        .bind("months", months)
        .bind("fullPeriods", format!("INT(months/{PERIOD_MONTHS})"))
        .bind("monthsIn", format!("MOD(months,{PERIOD_MONTHS})"))
        .bind("fullProd", format!("IF(fullPeriods=0,1,{full_product})"))
        .bind("partial", partial)
        .body("ROUND(principal*fullProd*partial,2)")
}
