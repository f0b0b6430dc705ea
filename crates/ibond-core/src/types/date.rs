//! Calendar dates with spreadsheet month arithmetic.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// An issue, announcement or valuation date.
///
/// Month arithmetic matches the two spreadsheet functions the workbook is
/// built on: [`Date::add_months`] is `EDATE` and [`Date::months_until`] is
/// `DATEDIF(.., "m")`. Serialized as `YYYY-MM-DD`.
///
/// ```rust
/// use ibond_core::Date;
///
/// let issue = Date::from_ymd(2024, 8, 31).unwrap();
/// assert_eq!(issue.add_months(6).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Builds a date from its parts.
    ///
    /// # Errors
    ///
    /// `TrackerError::InvalidDate` when the parts do not name a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TrackerResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| TrackerError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses `YYYY-MM-DD`, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> TrackerResult<Self> {
        s.trim()
            .parse::<NaiveDate>()
            .map(Self)
            .map_err(|_| TrackerError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// The local calendar day, as the workbook's `TODAY()` sees it.
    #[must_use]
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1 to 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Shifts by whole months, clamping the day to the end of a shorter
    /// month (`EDATE`). Negative offsets move backwards.
    ///
    /// # Errors
    ///
    /// `TrackerError::InvalidDate` when the result leaves chrono's range.
    pub fn add_months(&self, months: i32) -> TrackerResult<Self> {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(step)
        } else {
            self.0.checked_sub_months(step)
        };
        shifted
            .map(Self)
            .ok_or_else(|| TrackerError::invalid_date(format!("{self} shifted by {months} months")))
    }

    /// Whole months elapsed from `self` to `later`.
    ///
    /// A month counts once the day of month reaches the start day, so
    /// 2024-01-15 to 2024-02-14 is zero months and to 2024-02-15 is one.
    /// `None` when `later` is before `self`.
    #[must_use]
    pub fn months_until(&self, later: &Date) -> Option<u32> {
        if later < self {
            return None;
        }
        let span = (later.year() - self.year()) * 12 + later.month() as i32 - self.month() as i32;
        let incomplete = i32::from(later.day() < self.day());
        u32::try_from(span - incomplete).ok()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
