//! BondSchedule formulas.
//!
//! The selector in `B1` resolves the bond's inputs into `B3:B6`; the
//! columns anchored in row 9 spill one row per projected month. The value
//! column builds the per-period growth vector once, scans it into an
//! exclusive prefix product (`VSTACK(1, SCAN(...))`), and applies each
//! row's own partial factor.

use ibond_core::accrual::PERIOD_MONTHS;

use super::accrual::{composite, growth, period_start, rate_on};
use super::expr::{if_any_blank, iferror_blank, lambda, Let};
use crate::layout::{a1, abs, names, schedule_cell};

/// Absolute references to the selector and resolved cells.
#[derive(Debug, Clone)]
pub struct ScheduleRefs {
    /// `$B$1`
    pub selector: String,
    /// `$B$3`
    pub issue: String,
    /// `$B$4`
    pub amount: String,
    /// `$B$5`
    pub fixed: String,
    /// `$B$6`
    pub months: String,
    /// `ANCHORARRAY(B9)`, the spilled month indices.
    pub month_index: String,
    /// `ANCHORARRAY(C9)`, the spilled variable rates.
    pub variable_rate: String,
}

impl Default for ScheduleRefs {
    fn default() -> Self {
        let (row, col) = schedule_cell::SELECTOR;
        let resolved = |offset: u32| abs(col, schedule_cell::FIRST_RESOLVED_ROW + offset + 1);
        // The file format has no `#` spill operator; it stores ANCHORARRAY.
        let spill = |col: u16| format!("ANCHORARRAY({})", a1(col, schedule_cell::SPILL_ROW + 1));
        Self {
            selector: abs(col, row + 1),
            issue: resolved(0),
            amount: resolved(1),
            fixed: resolved(2),
            months: resolved(3),
            month_index: spill(1),
            variable_rate: spill(2),
        }
    }
}

impl ScheduleRefs {
    fn when_issued(&self, expr: &str) -> String {
        format!("=IF({}=\"\",\"\",{})", self.issue, expr)
    }

    fn month_indices(&self) -> String {
        format!("SEQUENCE({}+1,1,0,1)", self.months)
    }
}

/// Resolved IssueDate, PurchaseAmount or FixedRate: blank on a miss or a
/// blank source cell.
#[must_use]
pub fn resolved_field(refs: &ScheduleRefs, source: &str) -> String {
    let lookup = Let::new()
        .bind(
            "found",
            format!("XLOOKUP({},{},{})", refs.selector, names::BOND_IDS, source),
        )
        .body("IF(found=\"\",\"\",found)");
    format!(
        "=IF({}=\"\",\"\",{})",
        refs.selector,
        iferror_blank(&lookup)
    )
}

/// Resolved MonthsToProject: 0 on a miss.
#[must_use]
pub fn resolved_months(refs: &ScheduleRefs) -> String {
    format!(
        "=IF({sel}=\"\",0,IFERROR(N(XLOOKUP({sel},{ids},{months})),0))",
        sel = refs.selector,
        ids = names::BOND_IDS,
        months = names::BOND_MONTHS,
    )
}

/// Month column: calendar month of each row.
#[must_use]
pub fn month_column(refs: &ScheduleRefs) -> String {
    refs.when_issued(&iferror_blank(&format!(
        "EDATE({},{})",
        refs.issue,
        refs.month_indices()
    )))
}

/// MonthIndex column: `0..=MonthsToProject`.
#[must_use]
pub fn month_index_column(refs: &ScheduleRefs) -> String {
    refs.when_issued(&iferror_blank(&refs.month_indices()))
}

/// VariableRate column: rate of the period containing each month.
#[must_use]
pub fn variable_rate_column(refs: &ScheduleRefs) -> String {
    let body = Let::new().bind("m", refs.month_index.as_str()).body(iferror_blank(
        &rate_on(&period_start(&refs.issue, &format!("INT(m/{PERIOD_MONTHS})"))),
    ));
    refs.when_issued(&body)
}

/// CompositeRate column.
#[must_use]
pub fn composite_rate_column(refs: &ScheduleRefs) -> String {
    let body = Let::new()
        .bind("fixed", refs.fixed.as_str())
        .bind("varVec", refs.variable_rate.as_str())
        .body(iferror_blank(&composite("fixed", "varVec")));
    refs.when_issued(&body)
}

/// Value column.
#[must_use]
pub fn value_column(refs: &ScheduleRefs) -> String {
    let scan = format!("SCAN(1,halfFac,{})", lambda(&["acc", "g"], "acc*g"));
    let body = Let::new()
        .bind("issue", refs.issue.as_str())
        .bind("principal", refs.amount.as_str())
        .bind("fixed", refs.fixed.as_str())
        .bind("m", refs.month_index.as_str())
        .bind(
            "periods",
            format!("SEQUENCE(INT({}/{PERIOD_MONTHS})+1,1,0,1)", refs.months),
        )
        .bind("varVec", rate_on(&period_start("issue", "periods")))
        .bind("halfFac", growth("fixed", "varVec"))
        .bind("cumProd", format!("VSTACK(1,{scan})"))
        .bind("periodIdx", format!("INT(m/{PERIOD_MONTHS})"))
        .bind("monthsIn", format!("MOD(m,{PERIOD_MONTHS})"))
        .bind("fullProd", "INDEX(cumProd,periodIdx+1)")
        .bind(
            "partial",
            format!("INDEX(halfFac,periodIdx+1)^(monthsIn/{PERIOD_MONTHS})"),
        )
        .body(iferror_blank("ROUND(principal*fullProd*partial,2)"));
    format!(
        "={}",
        if_any_blank(&[&refs.issue, &refs.amount, &refs.fixed], &body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::expr::is_balanced;

    #[test]
    fn test_default_refs() {
        let refs = ScheduleRefs::default();
        assert_eq!(refs.selector, "$B$1");
        assert_eq!(refs.issue, "$B$3");
        assert_eq!(refs.amount, "$B$4");
        assert_eq!(refs.fixed, "$B$5");
        assert_eq!(refs.months, "$B$6");
        assert_eq!(refs.month_index, "ANCHORARRAY(B9)");
        assert_eq!(refs.variable_rate, "ANCHORARRAY(C9)");
    }

    #[test]
    fn test_resolved_fields() {
        let refs = ScheduleRefs::default();
        assert_eq!(
            resolved_field(&refs, names::BOND_ISSUE_DATES),
            "=IF($B$1=\"\",\"\",IFERROR(LET(_xlpm.found,XLOOKUP($B$1,BondIDs,BondIssueDates),\
             IF(_xlpm.found=\"\",\"\",_xlpm.found)),\"\"))"
        );
        assert_eq!(
            resolved_months(&refs),
            "=IF($B$1=\"\",0,IFERROR(N(XLOOKUP($B$1,BondIDs,BondMonthsToProject)),0))"
        );
    }

    #[test]
    fn test_index_columns() {
        let refs = ScheduleRefs::default();
        assert_eq!(
            month_column(&refs),
            "=IF($B$3=\"\",\"\",IFERROR(EDATE($B$3,SEQUENCE($B$6+1,1,0,1)),\"\"))"
        );
        assert_eq!(
            month_index_column(&refs),
            "=IF($B$3=\"\",\"\",IFERROR(SEQUENCE($B$6+1,1,0,1),\"\"))"
        );
    }

    #[test]
    fn test_rate_columns() {
        let refs = ScheduleRefs::default();
        assert_eq!(
            variable_rate_column(&refs),
            "=IF($B$3=\"\",\"\",LET(_xlpm.m,ANCHORARRAY(B9),IFERROR(INDEX(RateVariableRates,\
             MATCH(EDATE($B$3,6*INT(_xlpm.m/6)),RateEffDates,1)),\"\")))"
        );
        assert_eq!(
            composite_rate_column(&refs),
            "=IF($B$3=\"\",\"\",LET(_xlpm.fixed,$B$5,_xlpm.varVec,ANCHORARRAY(C9),\
             IFERROR(_xlpm.fixed+_xlpm.varVec+_xlpm.fixed*_xlpm.varVec,\"\")))"
        );
    }

    #[test]
    fn test_value_column_uses_exclusive_prefix() {
        let text = value_column(&ScheduleRefs::default());
        assert!(is_balanced(&text));
        assert!(text.starts_with("=IF(OR($B$3=\"\",$B$4=\"\",$B$5=\"\"),\"\",LET("));
        assert!(text.contains(
            "_xlpm.cumProd,VSTACK(1,SCAN(1,_xlpm.halfFac,LAMBDA(_xlpm.acc,_xlpm.g,_xlpm.acc*_xlpm.g)))"
        ));
        assert!(text.contains("_xlpm.fullProd,INDEX(_xlpm.cumProd,_xlpm.periodIdx+1)"));
        assert!(text.contains("_xlpm.periods,SEQUENCE(INT($B$6/6)+1,1,0,1)"));
        assert!(text.contains("MATCH(EDATE(_xlpm.issue,6*_xlpm.periods),RateEffDates,1)"));
    }

    #[test]
    fn test_value_column_always_reads_running_period_rate() {
        // A boundary month still resolves its period's growth, so a missing
        // rate blanks the cell through IFERROR instead of passing the
        // principal through.
        let text = value_column(&ScheduleRefs::default());
        assert!(text.contains(
            "_xlpm.partial,INDEX(_xlpm.halfFac,_xlpm.periodIdx+1)^(_xlpm.monthsIn/6)"
        ));
        assert!(!text.contains("IF(_xlpm.monthsIn=0"));
        assert!(text.contains("IFERROR(ROUND(_xlpm.principal*_xlpm.fullProd*_xlpm.partial,2),\"\")"));
    }
}
