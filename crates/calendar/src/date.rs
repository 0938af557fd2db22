//! Proleptic Gregorian calendar date.

use std::fmt;
use std::str::FromStr;

use crate::civil::{self, MAX_YEAR, MIN_YEAR};
use crate::clock::Clock;
use crate::error::CalendarError;
use crate::field::{Field, Unit};
use crate::month::Month;
use crate::partial::{MonthDay, YearMonth};
use crate::pattern::{ISO_DATE, ParsedFields, Pattern, Temporal};
use crate::time::ClockTime;
use crate::timestamp::Timestamp;
use crate::zone::Zone;

/// A date without a time of day, such as `2024-12-25`.
///
/// Always holds a valid day of the proleptic Gregorian calendar within
/// [`MIN_YEAR`]..=[`MAX_YEAR`]. Values are immutable; every `with_*` and
/// `plus_*` method returns a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// The earliest supported date, `-9999-01-01`.
    pub const MIN: CalendarDate = CalendarDate {
        year: MIN_YEAR,
        month: 1,
        day: 1,
    };

    /// The latest supported date, `9999-12-31`.
    pub const MAX: CalendarDate = CalendarDate {
        year: MAX_YEAR,
        month: 12,
        day: 31,
    };

    /// `1970-01-01`.
    pub const EPOCH: CalendarDate = CalendarDate {
        year: 1970,
        month: 1,
        day: 1,
    };

    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the year is outside the
    /// supported range, the month is not in 1..=12, or the day does not
    /// exist in that month (e.g. April 31, or February 29 of a common year).
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::checked(i64::from(year), i64::from(month), i64::from(day))
    }

    /// Creates a date from year, symbolic month and day.
    ///
    /// # Errors
    ///
    /// Same as [`CalendarDate::of`].
    pub fn of_month(year: i32, month: Month, day: u8) -> Result<Self, CalendarError> {
        Self::of(year, month.number(), day)
    }

    /// Creates a date from a year and a 1-based day of year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the day of year does not
    /// exist in `year`.
    pub fn of_year_day(year: i32, day_of_year: u16) -> Result<Self, CalendarError> {
        let year = i64::from(year);
        match civil::month_day_from_doy(year, day_of_year) {
            Some((month, day)) => Self::checked(year, i64::from(month), i64::from(day)),
            None => Err(CalendarError::InvalidDate {
                year,
                month: 1,
                day: i64::from(day_of_year),
                reason: format!(
                    "day of year must be 1..={}",
                    civil::days_in_year(year)
                ),
            }),
        }
    }

    /// Returns the current date as read from `clock`.
    ///
    /// The wall-clock reading is resolved in `zone`, or in the process
    /// local offset when `zone` is `None`.
    pub fn today<C: Clock + ?Sized>(clock: &C, zone: Option<&Zone>) -> Self {
        Timestamp::now(clock, zone).to_date()
    }

    /// Creates a date from a count of days relative to 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the result is outside the
    /// supported year range.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, CalendarError> {
        // Clamp before converting so the arithmetic cannot overflow; any
        // clamped value is far outside the supported range anyway.
        let (year, month, day) = civil::civil_from_days(epoch_day.clamp(-(1 << 40), 1 << 40));
        Self::checked(year, i64::from(month), i64::from(day))
    }

    /// Returns the number of days relative to 1970-01-01.
    pub fn to_epoch_day(self) -> i64 {
        civil::days_from_civil(i64::from(self.year), self.month, self.day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the symbolic month.
    pub fn month(self) -> Month {
        Month::from_valid(self.month)
    }

    /// Returns the month number (1..=12).
    pub fn month_value(self) -> u8 {
        self.month
    }

    /// Returns the day of month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of year (1..=366).
    pub fn day_of_year(self) -> u16 {
        civil::day_of_year(i64::from(self.year), self.month, self.day)
    }

    /// Returns `true` if the year of this date is a leap year.
    pub fn is_leap_year(self) -> bool {
        civil::is_leap_year(i64::from(self.year))
    }

    /// Returns the number of days in the month of this date.
    pub fn length_of_month(self) -> u8 {
        civil::days_in_month(i64::from(self.year), i64::from(self.month))
    }

    /// Returns the number of days in the year of this date.
    pub fn length_of_year(self) -> u16 {
        civil::days_in_year(i64::from(self.year))
    }

    /// Returns the value of a date field.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] for time-of-day fields.
    pub fn get(self, field: Field) -> Result<i64, CalendarError> {
        match field {
            Field::Year => Ok(i64::from(self.year)),
            Field::MonthOfYear => Ok(i64::from(self.month)),
            Field::DayOfMonth => Ok(i64::from(self.day)),
            Field::DayOfYear => Ok(i64::from(self.day_of_year())),
            _ => Err(CalendarError::UnsupportedField {
                field,
                target: Self::KIND,
            }),
        }
    }

    /// Returns `true` if `field` can be read from or written to a date.
    ///
    /// Time-of-day fields are never supported.
    pub fn is_field_supported(self, field: Field) -> bool {
        field.is_date_based()
    }

    /// Returns `true` if dates can be moved by amounts of `unit`.
    pub fn is_unit_supported(self, unit: Unit) -> bool {
        unit.is_date_based()
    }

    /// Returns a copy with the year replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the result is not a valid
    /// date (e.g. February 29 moved to a common year).
    pub fn with_year(self, year: i32) -> Result<Self, CalendarError> {
        self.with_field(Field::Year, i64::from(year))
    }

    /// Returns a copy with the month replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the result is not a valid
    /// date (e.g. day 31 moved to April).
    pub fn with_month(self, month: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::MonthOfYear, i64::from(month))
    }

    /// Returns a copy with the day of month replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the day does not exist in
    /// the month.
    pub fn with_day(self, day: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::DayOfMonth, i64::from(day))
    }

    /// Returns a copy with the day of year replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the day of year does not
    /// exist in the year.
    pub fn with_day_of_year(self, day_of_year: u16) -> Result<Self, CalendarError> {
        Self::of_year_day(self.year, day_of_year)
    }

    /// Returns a copy with one field replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] for time-of-day fields and
    /// [`CalendarError::InvalidDate`] if the result is not a valid date.
    pub fn with_field(self, field: Field, value: i64) -> Result<Self, CalendarError> {
        let (year, month, day) = (
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        match field {
            Field::Year => Self::checked(value, month, day),
            Field::MonthOfYear => Self::checked(year, value, day),
            Field::DayOfMonth => Self::checked(year, month, value),
            Field::DayOfYear => match u16::try_from(value) {
                Ok(doy) => self.with_day_of_year(doy),
                Err(_) => Err(CalendarError::InvalidDate {
                    year,
                    month: 1,
                    day: value,
                    reason: "day of year out of range".to_string(),
                }),
            },
            _ => Err(CalendarError::UnsupportedField {
                field,
                target: Self::KIND,
            }),
        }
    }

    /// Returns the date `days` days later (earlier when negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the result is outside the
    /// supported range.
    pub fn plus_days(self, days: i64) -> Result<Self, CalendarError> {
        let epoch_day = self
            .to_epoch_day()
            .checked_add(days)
            .ok_or_else(|| self.out_of_range(format!("adding {days} days overflows")))?;
        Self::from_epoch_day(epoch_day)
    }

    /// Returns the date `months` months later (earlier when negative).
    ///
    /// The day of month is clamped to the last day of the target month, so
    /// `2024-01-31` plus one month is `2024-02-29`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the result is outside the
    /// supported range.
    pub fn plus_months(self, months: i64) -> Result<Self, CalendarError> {
        let target = self
            .proleptic_month()
            .checked_add(months)
            .ok_or_else(|| self.out_of_range(format!("adding {months} months overflows")))?;
        let year = target.div_euclid(12);
        let month = target.rem_euclid(12) + 1;
        let day = i64::from(self.day).min(i64::from(civil::days_in_month(year, month)));
        Self::checked(year, month, day)
    }

    /// Returns the date `years` years later (earlier when negative).
    ///
    /// February 29 becomes February 28 when the target year is common.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the result is outside the
    /// supported range.
    pub fn plus_years(self, years: i64) -> Result<Self, CalendarError> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| self.out_of_range(format!("adding {years} years overflows")))?;
        self.plus_months(months)
    }

    /// Combines this date with a time of day.
    pub fn at_time(self, time: ClockTime) -> Timestamp {
        Timestamp::of_date_time(self, time)
    }

    /// Returns midnight at the start of this date.
    pub fn at_start_of_day(self) -> Timestamp {
        self.at_time(ClockTime::MIDNIGHT)
    }

    /// Returns the year and month of this date.
    pub fn year_month(self) -> YearMonth {
        YearMonth::from(self)
    }

    /// Returns the month and day of this date.
    pub fn month_day(self) -> MonthDay {
        MonthDay::from(self)
    }

    /// Returns `true` if this date is strictly later than `other`.
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// Returns `true` if this date is strictly earlier than `other`.
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }

    /// Returns `true` if both values name the same day.
    pub fn is_equal(self, other: Self) -> bool {
        self == other
    }

    /// Renders this date with `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if the pattern contains
    /// time-of-day tokens.
    pub fn format(self, pattern: &Pattern) -> Result<String, CalendarError> {
        pattern.format(&self)
    }

    /// Parses a date that exactly matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FormatMismatch`] if `text` does not match,
    /// [`CalendarError::IncompleteFields`] if the pattern lacks year, month
    /// or day, and [`CalendarError::InvalidDate`] if the fields do not form
    /// a valid date.
    pub fn parse(text: &str, pattern: &Pattern) -> Result<Self, CalendarError> {
        pattern.parse(text)
    }

    /// Months elapsed since year 0, January.
    pub(crate) fn proleptic_month(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Builds a date from components already known to be valid.
    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(Self::of(year, month, day).is_ok());
        Self { year, month, day }
    }

    pub(crate) fn checked(year: i64, month: i64, day: i64) -> Result<Self, CalendarError> {
        let invalid = |reason: String| CalendarError::InvalidDate {
            year,
            month,
            day,
            reason,
        };
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
            return Err(invalid(format!("year must be {MIN_YEAR}..={MAX_YEAR}")));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid("month must be 1..=12".to_string()));
        }
        let max_day = civil::days_in_month(year, month);
        if !(1..=i64::from(max_day)).contains(&day) {
            return Err(invalid(format!("day must be 1..={max_day} for month {month}")));
        }
        Ok(Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        })
    }

    fn out_of_range(self, reason: String) -> CalendarError {
        CalendarError::InvalidDate {
            year: i64::from(self.year),
            month: i64::from(self.month),
            day: i64::from(self.day),
            reason,
        }
    }
}

impl Temporal for CalendarDate {
    const KIND: &'static str = "CalendarDate";

    fn field(&self, field: Field) -> Result<i64, CalendarError> {
        self.get(field)
    }

    fn from_fields(fields: &ParsedFields) -> Result<Self, CalendarError> {
        let [year, month, day] = fields.require(
            Self::KIND,
            [Field::Year, Field::MonthOfYear, Field::DayOfMonth],
        )?;
        Self::checked(year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses the ISO form `yyyy-MM-dd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::compile(ISO_DATE)?.parse(s)
    }
}
