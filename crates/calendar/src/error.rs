//! Error types for the almanac-calendar crate.

use crate::field::{Field, Unit};

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Every variant is raised synchronously by the call that detects the
/// problem. Construction is atomic: a failing call never yields a partially
/// built value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when year/month/day do not name a day of the proleptic
    /// Gregorian calendar within the supported year range.
    #[error("invalid date {year}-{month}-{day}: {reason}")]
    InvalidDate {
        /// The requested year.
        year: i64,
        /// The requested month.
        month: i64,
        /// The requested day of month.
        day: i64,
        /// Which constraint was violated.
        reason: String,
    },

    /// Returned when a month number is not in 1..=12.
    #[error("invalid month {value}: must be 1..=12")]
    InvalidMonth {
        /// The month number that was provided.
        value: i64,
    },

    /// Returned when a time-of-day component is out of range.
    #[error("invalid time: {field} = {value} (must be {min}..={max})")]
    InvalidTime {
        /// The offending component.
        field: Field,
        /// The value that was provided.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Returned when a zone identifier is not recognised.
    #[error("unknown zone: {id:?}")]
    UnknownZone {
        /// The identifier as given by the caller.
        id: String,
    },

    /// Returned when text does not exactly match a pattern.
    #[error("text {text:?} does not match pattern at offset {position}: {reason}")]
    FormatMismatch {
        /// The text being parsed.
        text: String,
        /// Byte offset where matching failed.
        position: usize,
        /// What was expected at that offset.
        reason: String,
    },

    /// Returned when a parsed pattern lacks fields the target type needs.
    #[error("cannot build {target} from pattern: missing {}", join_fields(.missing))]
    IncompleteFields {
        /// Name of the requested target type.
        target: &'static str,
        /// Fields required by the target but absent from the pattern.
        missing: Vec<Field>,
    },

    /// Returned when an amount is requested in a unit the value cannot express.
    #[error("unsupported unit {unit} for {target}")]
    UnsupportedUnit {
        /// The requested unit.
        unit: Unit,
        /// Name of the value type.
        target: &'static str,
    },

    /// Returned when a field is queried or set on a value that does not carry it.
    #[error("unsupported field {field} for {target}")]
    UnsupportedField {
        /// The requested field.
        field: Field,
        /// Name of the value type.
        target: &'static str,
    },

    /// Returned when a pattern string cannot be tokenized.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as given by the caller.
        pattern: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an instant falls outside the representable range.
    #[error("instant out of range: {seconds}s from the epoch")]
    InstantOutOfRange {
        /// Seconds relative to 1970-01-01T00:00:00Z.
        seconds: i64,
    },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2024,
            month: 4,
            day: 31,
            reason: "day must be 1..=30 for month 4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date 2024-4-31: day must be 1..=30 for month 4"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { value: 13 };
        assert_eq!(err.to_string(), "invalid month 13: must be 1..=12");
    }

    #[test]
    fn error_invalid_time() {
        let err = CalendarError::InvalidTime {
            field: Field::HourOfDay,
            value: 24,
            min: 0,
            max: 23,
        };
        assert_eq!(err.to_string(), "invalid time: HourOfDay = 24 (must be 0..=23)");
    }

    #[test]
    fn error_incomplete_fields_lists_all() {
        let err = CalendarError::IncompleteFields {
            target: "ClockTime",
            missing: vec![Field::HourOfDay, Field::MinuteOfHour],
        };
        assert_eq!(
            err.to_string(),
            "cannot build ClockTime from pattern: missing HourOfDay, MinuteOfHour"
        );
    }

    #[test]
    fn error_unsupported_unit() {
        let err = CalendarError::UnsupportedUnit {
            unit: Unit::Minutes,
            target: "Duration",
        };
        assert_eq!(err.to_string(), "unsupported unit Minutes for Duration");
    }

    #[test]
    fn error_unknown_zone() {
        let err = CalendarError::UnknownZone {
            id: "Mars/Olympus".to_string(),
        };
        assert_eq!(err.to_string(), "unknown zone: \"Mars/Olympus\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::InstantOutOfRange { seconds: i64::MAX };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
