//! Error types for the tracker's native model.
//!
//! The generated workbook swallows every fault into a blank cell. The native
//! model reports the same conditions as structured errors instead, so callers
//! can tell a gap in the rate table apart from a bond that simply has no value.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// The main error type for tracker operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// Invalid or out-of-range date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A required bond input is blank.
    #[error("Missing input: {field}")]
    MissingInput {
        /// Name of the blank field.
        field: &'static str,
    },

    /// An input value cannot be used by the model.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// No rate announcement is effective on or before the period start.
    #[error("No variable rate effective on or before {target} (period {period})")]
    MissingRate {
        /// Zero-based six-month period index.
        period: u32,
        /// First day of the period.
        target: Date,
    },

    /// Two bonds share the same identifier.
    #[error("Duplicate bond id: {bond_id}")]
    DuplicateBond {
        /// The repeated identifier.
        bond_id: String,
    },
}

impl TrackerError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true when the error means "the workbook would show a blank".
    #[must_use]
    pub fn is_blank_result(&self) -> bool {
        matches!(self, Self::MissingInput { .. } | Self::MissingRate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_missing_rate_display() {
        let err = TrackerError::MissingRate {
            period: 0,
            target: Date::from_ymd(2024, 1, 15).unwrap(),
        };
        assert!(err.to_string().contains("2024-01-15"));
        assert!(err.is_blank_result());
    }

    #[test]
    fn test_invalid_input_is_not_blank() {
        let err = TrackerError::invalid_input("purchase_amount", "negative");
        assert!(!err.is_blank_result());
    }
}
