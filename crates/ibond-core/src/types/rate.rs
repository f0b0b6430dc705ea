//! Variable-rate announcements and the table they form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Months between two regular announcements.
pub const ANNOUNCEMENT_SPACING_MONTHS: u32 = 6;

/// One semiannual variable-rate announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRecord {
    /// First day the rate applies to newly starting periods.
    #[serde(alias = "EffDate")]
    pub effective_date: Date,
    /// Annual variable rate as a decimal (0.0490 for 4.90%).
    #[serde(alias = "VariableRate")]
    pub variable_rate: Decimal,
}

impl RateRecord {
    /// Creates a new announcement.
    #[must_use]
    pub fn new(effective_date: Date, variable_rate: Decimal) -> Self {
        Self {
            effective_date,
            variable_rate,
        }
    }
}

/// Something about a rate table that the lookup tolerates but a user
/// probably did not intend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateIrregularity {
    /// The same effective date appears more than once; the later row wins.
    DuplicateDate {
        /// The repeated date.
        date: Date,
    },
    /// Two consecutive announcements are not six months apart.
    Spacing {
        /// Earlier announcement.
        from: Date,
        /// Later announcement.
        to: Date,
        /// Whole months between them.
        months: u32,
    },
}

impl fmt::Display for RateIrregularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDate { date } => write!(f, "duplicate effective date {date}"),
            Self::Spacing { from, to, months } => write!(
                f,
                "{from} -> {to} is {months} months apart (expected {ANNOUNCEMENT_SPACING_MONTHS})"
            ),
        }
    }
}

/// Announcements ordered by effective date.
///
/// Lookups return the latest announcement effective on or before a date,
/// the same answer an approximate `MATCH(date, EffDate, 1)` gives on the
/// sorted Rates sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RateRecord>", into = "Vec<RateRecord>")]
pub struct RateTable {
    records: Vec<RateRecord>,
}

impl RateTable {
    /// Builds a table, sorting the records by effective date.
    ///
    /// The sort is stable, so of two records sharing a date the one given
    /// last stays last and wins lookups.
    #[must_use]
    pub fn new(mut records: Vec<RateRecord>) -> Self {
        if !records
            .windows(2)
            .all(|w| w[0].effective_date <= w[1].effective_date)
        {
            tracing::debug!(count = records.len(), "sorting rate announcements by date");
            records.sort_by_key(|r| r.effective_date);
        }
        Self { records }
    }

    /// Returns the announcement in effect on `date`, if any.
    #[must_use]
    pub fn rate_on(&self, date: Date) -> Option<&RateRecord> {
        let idx = self
            .records
            .partition_point(|r| r.effective_date <= date);
        idx.checked_sub(1).map(|i| &self.records[i])
    }

    /// Returns the records in ascending date order.
    #[must_use]
    pub fn records(&self) -> &[RateRecord] {
        &self.records
    }

    /// Iterates the records in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &RateRecord> {
        self.records.iter()
    }

    /// Number of announcements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no announcements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lists duplicate dates and gaps that break the six-month cadence.
    #[must_use]
    pub fn irregularities(&self) -> Vec<RateIrregularity> {
        self.records
            .windows(2)
            .filter_map(|pair| {
                let (from, to) = (pair[0].effective_date, pair[1].effective_date);
                if from == to {
                    return Some(RateIrregularity::DuplicateDate { date: to });
                }
                let months = from.months_until(&to).unwrap_or(0);
                (months != ANNOUNCEMENT_SPACING_MONTHS)
                    .then_some(RateIrregularity::Spacing { from, to, months })
            })
            .collect()
    }
}

impl From<Vec<RateRecord>> for RateTable {
    fn from(records: Vec<RateRecord>) -> Self {
        Self::new(records)
    }
}

impl From<RateTable> for Vec<RateRecord> {
    fn from(table: RateTable) -> Self {
        table.records
    }
}

impl FromIterator<RateRecord> for RateTable {
    fn from_iter<I: IntoIterator<Item = RateRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn table() -> RateTable {
        RateTable::new(vec![
            RateRecord::new(d("2024-11-01"), dec!(0.0390)),
            RateRecord::new(d("2024-05-01"), dec!(0.0490)),
            RateRecord::new(d("2025-05-01"), dec!(0.0286)),
        ])
    }

    #[test]
    fn test_sorted_on_construction() {
        let dates: Vec<Date> = table().iter().map(|r| r.effective_date).collect();
        assert_eq!(dates, vec![d("2024-05-01"), d("2024-11-01"), d("2025-05-01")]);
    }

    #[test]
    fn test_rate_on_latest_not_after() {
        let rates = table();
        assert_eq!(rates.rate_on(d("2024-05-01")).unwrap().variable_rate, dec!(0.0490));
        assert_eq!(rates.rate_on(d("2024-10-31")).unwrap().variable_rate, dec!(0.0490));
        assert_eq!(rates.rate_on(d("2024-11-01")).unwrap().variable_rate, dec!(0.0390));
        assert_eq!(rates.rate_on(d("2030-01-01")).unwrap().variable_rate, dec!(0.0286));
    }

    #[test]
    fn test_rate_on_before_first_announcement() {
        assert!(table().rate_on(d("2024-04-30")).is_none());
        assert!(RateTable::default().rate_on(d("2024-04-30")).is_none());
    }

    #[test]
    fn test_duplicate_date_last_wins() {
        let rates = RateTable::new(vec![
            RateRecord::new(d("2024-05-01"), dec!(0.01)),
            RateRecord::new(d("2024-05-01"), dec!(0.02)),
        ]);
        assert_eq!(rates.rate_on(d("2024-06-01")).unwrap().variable_rate, dec!(0.02));
        assert_eq!(
            rates.irregularities(),
            vec![RateIrregularity::DuplicateDate { date: d("2024-05-01") }]
        );
    }

    #[test]
    fn test_irregular_spacing() {
        let rates = RateTable::new(vec![
            RateRecord::new(d("2024-05-01"), dec!(0.0490)),
            RateRecord::new(d("2025-05-01"), dec!(0.0286)),
        ]);
        let found = rates.irregularities();
        assert_eq!(found.len(), 1);
        assert!(found[0].to_string().contains("12 months"));
        assert!(table().irregularities().is_empty());
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            rates: RateTable,
        }
        let doc: Doc = toml::from_str(
            r#"
            [[rates]]
            effective_date = "2024-11-01"
            variable_rate = 0.039

            [[rates]]
            effective_date = "2024-05-01"
            variable_rate = 0.049
            "#,
        )
        .unwrap();
        assert_eq!(doc.rates.len(), 2);
        assert_eq!(doc.rates.records()[0].effective_date, d("2024-05-01"));
    }
}
