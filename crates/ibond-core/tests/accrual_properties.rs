//! Behavioural properties of the accrual model.

use ibond_core::accrual::{composite_rate, period_growth, round_cents, value_at, PERIOD_MONTHS};
use ibond_core::prelude::*;
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn d(s: &str) -> Date {
    Date::parse(s).unwrap_or_else(|_| panic!("Failed to parse date: {}", s))
}

fn sample_terms() -> BondTerms {
    BondTerms::new(d("2024-01-15"), dec!(1000.00), dec!(0.009))
}

// ============================================================================
// Worked scenario
// ============================================================================

#[test]
fn scenario_with_only_later_announcements_is_blank() {
    // Neither announcement is effective on the issue date, so the first
    // period has no rate and the value is a lookup miss, not zero.
    let rates = RateTable::new(vec![
        RateRecord::new(d("2024-05-01"), dec!(0.0490)),
        RateRecord::new(d("2024-11-01"), dec!(0.0390)),
    ]);

    let err = value_at(&sample_terms(), &rates, 12).unwrap_err();
    assert!(err.is_blank_result());
    assert!(matches!(err, TrackerError::MissingRate { period: 0, .. }));
}

#[test]
fn scenario_twelve_months_uses_two_period_rates() {
    // With the November 2023 announcement in place, the two completed
    // periods earn 4.30% and 4.90% variable; month 12 closes period 1 so the
    // 3.90% period only starts.
    let rates = RateTable::new(vec![
        RateRecord::new(d("2023-11-01"), dec!(0.0430)),
        RateRecord::new(d("2024-05-01"), dec!(0.0490)),
        RateRecord::new(d("2024-11-01"), dec!(0.0390)),
    ]);

    let value = value_at(&sample_terms(), &rates, 12).unwrap();

    let first = 1.0 + (0.009 + 0.043 + 0.009 * 0.043) / 2.0;
    let second = 1.0 + (0.009 + 0.049 + 0.009 * 0.049) / 2.0;
    assert_eq!(value, round_cents(1000.0 * first * second).unwrap());
    assert_eq!(value, dec!(1056.18));
}

#[test]
fn value_at_issue_is_exact() {
    let rates = RateTable::new(vec![RateRecord::new(d("2020-01-01"), dec!(0.0712))]);
    for amount in [dec!(25.00), dec!(1000.00), dec!(9999.99), dec!(10000)] {
        let terms = BondTerms::new(d("2024-03-01"), amount, dec!(0.013));
        assert_eq!(value_at(&terms, &rates, 0).unwrap(), amount);
    }
}

#[test]
fn issue_month_without_covering_rate_is_blank() {
    // Month zero has exponent zero, but the period-0 rate is still looked up.
    let rates = RateTable::new(vec![RateRecord::new(d("2024-05-01"), dec!(0.0490))]);
    let err = value_at(&sample_terms(), &rates, 0).unwrap_err();
    assert!(err.is_blank_result());
    assert_eq!(
        err,
        TrackerError::MissingRate {
            period: 0,
            target: d("2024-01-15")
        }
    );

    let schedule = Schedule::project(sample_terms(), &rates, 6).unwrap();
    let first = schedule.row(0).unwrap();
    assert_eq!(first.value, None);
    assert_eq!(first.variable_rate, None);
}

#[test]
fn boundary_month_value_is_full_period_growth() {
    let rates = RateTable::new(vec![RateRecord::new(d("2024-01-01"), dec!(0.05))]);
    let terms = sample_terms();
    let at_boundary = value_at(&terms, &rates, PERIOD_MONTHS).unwrap();
    let expected = round_cents(1000.0 * period_growth(0.009, 0.05)).unwrap();
    assert_eq!(at_boundary, expected);
}

#[test]
fn selection_miss_yields_no_schedule() {
    let portfolio = Portfolio::new(vec![BondRecord::new(
        "EX-0001",
        "Sample Owner",
        d("2024-01-15"),
        dec!(1000),
        dec!(0.009),
        120,
    )])
    .unwrap();
    let rates = RateTable::new(vec![RateRecord::new(d("2023-11-01"), dec!(0.0430))]);

    assert!(Schedule::for_selection(&portfolio, "EX-0002", &rates)
        .unwrap()
        .is_none());
}

// ============================================================================
// Properties
// ============================================================================

fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..1000).prop_map(|bp| Decimal::new(i64::from(bp), 4))
}

proptest! {
    #[test]
    fn value_is_non_decreasing_in_month(
        fixed in rate_strategy(),
        variables in prop::collection::vec(rate_strategy(), 1..12),
        cents in 2_500i64..1_000_000,
    ) {
        let issue = d("2020-01-15");
        let records = variables
            .iter()
            .enumerate()
            .map(|(i, v)| RateRecord::new(issue.add_months(6 * i as i32).unwrap(), *v))
            .collect();
        let rates = RateTable::new(records);
        let terms = BondTerms::new(issue, Decimal::new(cents, 2), fixed);

        let horizon = (variables.len() as u32) * PERIOD_MONTHS + 5;
        let schedule = Schedule::project(terms, &rates, horizon).unwrap();
        let mut previous = Decimal::MIN;
        for row in schedule.rows() {
            let value = row.unwrap().value.unwrap();
            prop_assert!(value >= previous, "value dropped at {}", value);
            previous = value;
        }
    }

    #[test]
    fn constant_rate_matches_compound_formula(
        fixed in rate_strategy(),
        variable in rate_strategy(),
        periods in 0u32..20,
    ) {
        let rates = RateTable::new(vec![RateRecord::new(d("2000-01-01"), variable)]);
        let terms = BondTerms::new(d("2024-01-15"), dec!(1000), fixed);

        let value = value_at(&terms, &rates, periods * PERIOD_MONTHS).unwrap();
        let (f, v) = (fixed.to_f64().unwrap(), variable.to_f64().unwrap());
        let expected = 1000.0 * (1.0 + composite_rate(f, v) / 2.0).powi(periods as i32);
        prop_assert!((value.to_f64().unwrap() - expected).abs() <= 0.005 + 1e-9);
    }
}
