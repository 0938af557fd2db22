//! Field and unit identifiers shared by every value type.

use std::fmt;

/// A named component of a date or time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Proleptic year, -9999..=9999.
    Year,
    /// Month of year, 1..=12.
    MonthOfYear,
    /// Day of month, 1..=31.
    DayOfMonth,
    /// Day of year, 1..=366.
    DayOfYear,
    /// Hour of day, 0..=23.
    HourOfDay,
    /// Minute of hour, 0..=59.
    MinuteOfHour,
    /// Second of minute, 0..=59.
    SecondOfMinute,
    /// Nanosecond of second, 0..=999_999_999.
    NanoOfSecond,
}

impl Field {
    /// All fields, date based first.
    pub const ALL: [Field; 8] = [
        Field::Year,
        Field::MonthOfYear,
        Field::DayOfMonth,
        Field::DayOfYear,
        Field::HourOfDay,
        Field::MinuteOfHour,
        Field::SecondOfMinute,
        Field::NanoOfSecond,
    ];

    /// Returns `true` for fields carried by a calendar date.
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Field::Year | Field::MonthOfYear | Field::DayOfMonth | Field::DayOfYear
        )
    }

    /// Returns `true` for fields carried by a time of day.
    pub const fn is_time_based(self) -> bool {
        !self.is_date_based()
    }

    /// Returns the outer `(min, max)` bounds of the field.
    ///
    /// Day fields have narrower bounds in practice; those depend on the
    /// month and year and are checked at construction.
    pub const fn range(self) -> (i64, i64) {
        match self {
            Field::Year => (crate::civil::MIN_YEAR as i64, crate::civil::MAX_YEAR as i64),
            Field::MonthOfYear => (1, 12),
            Field::DayOfMonth => (1, 31),
            Field::DayOfYear => (1, 366),
            Field::HourOfDay => (0, 23),
            Field::MinuteOfHour => (0, 59),
            Field::SecondOfMinute => (0, 59),
            Field::NanoOfSecond => (0, 999_999_999),
        }
    }

    /// Returns the display name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Year => "Year",
            Field::MonthOfYear => "MonthOfYear",
            Field::DayOfMonth => "DayOfMonth",
            Field::DayOfYear => "DayOfYear",
            Field::HourOfDay => "HourOfDay",
            Field::MinuteOfHour => "MinuteOfHour",
            Field::SecondOfMinute => "SecondOfMinute",
            Field::NanoOfSecond => "NanoOfSecond",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit in which an amount of elapsed time can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// One nanosecond.
    Nanos,
    /// One second.
    Seconds,
    /// Sixty seconds.
    Minutes,
    /// Sixty minutes.
    Hours,
    /// One calendar day.
    Days,
    /// One calendar month, of varying length.
    Months,
    /// Twelve months.
    Years,
}

impl Unit {
    /// Returns `true` for units that count calendar days or larger.
    pub const fn is_date_based(self) -> bool {
        matches!(self, Unit::Days | Unit::Months | Unit::Years)
    }

    /// Returns `true` for units shorter than a day.
    pub const fn is_time_based(self) -> bool {
        !self.is_date_based()
    }

    /// Returns the display name of the unit.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Nanos => "Nanos",
            Unit::Seconds => "Seconds",
            Unit::Minutes => "Minutes",
            Unit::Hours => "Hours",
            Unit::Days => "Days",
            Unit::Months => "Months",
            Unit::Years => "Years",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
