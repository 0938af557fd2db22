//! Partial dates: a year with a month, or a month with a day.

use std::fmt;

use crate::civil;
use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::field::Field;
use crate::month::Month;
use crate::pattern::{ParsedFields, Temporal};

/// A month of a specific year, such as `2024-05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Creates a year-month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for an out-of-range year or month.
    pub fn of(year: i32, month: u8) -> Result<Self, CalendarError> {
        let first = CalendarDate::of(year, month, 1)?;
        Ok(Self::from(first))
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the symbolic month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the month number (1..=12).
    pub fn month_value(self) -> u8 {
        self.month.number()
    }

    /// Returns `true` if the year is a leap year.
    pub fn is_leap_year(self) -> bool {
        civil::is_leap_year(i64::from(self.year))
    }

    /// Returns the number of days in this month of this year.
    pub fn length_of_month(self) -> u8 {
        self.month.length(self.is_leap_year())
    }

    /// Returns `true` if `day` exists in this month.
    pub fn is_valid_day(self, day: u8) -> bool {
        (1..=self.length_of_month()).contains(&day)
    }

    /// Returns the date at `day` of this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the day does not exist.
    pub fn at_day(self, day: u8) -> Result<CalendarDate, CalendarError> {
        CalendarDate::of(self.year, self.month.number(), day)
    }

    /// Returns the last day of this month.
    pub fn at_end_of_month(self) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month.number(), self.length_of_month())
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl Temporal for YearMonth {
    const KIND: &'static str = "YearMonth";

    fn field(&self, field: Field) -> Result<i64, CalendarError> {
        match field {
            Field::Year => Ok(i64::from(self.year)),
            Field::MonthOfYear => Ok(i64::from(self.month.number())),
            _ => Err(CalendarError::UnsupportedField {
                field,
                target: Self::KIND,
            }),
        }
    }

    fn from_fields(fields: &ParsedFields) -> Result<Self, CalendarError> {
        let [year, month] = fields.require(Self::KIND, [Field::Year, Field::MonthOfYear])?;
        Ok(Self::from(CalendarDate::checked(year, month, 1)?))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = CalendarDate::new_unchecked(self.year, self.month.number(), 1).to_string();
        // Drop the trailing "-01".
        f.write_str(&date[..date.len() - 3])
    }
}

/// A day of a month in no particular year, such as `--12-25`.
///
/// February 29 is valid because some years contain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Creates a month-day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the day exceeds the longest
    /// length of the month.
    pub fn of(month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::checked(i64::from(month), i64::from(day))
    }

    /// Returns the symbolic month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the month number (1..=12).
    pub fn month_value(self) -> u8 {
        self.month.number()
    }

    /// Returns the day of month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if this month-day exists in `year`.
    pub fn is_valid_year(self, year: i32) -> bool {
        self.day <= self.month.length(civil::is_leap_year(i64::from(year)))
    }

    /// Returns this month-day in `year`; February 29 becomes February 28 in
    /// a common year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for an out-of-range year.
    pub fn at_year(self, year: i32) -> Result<CalendarDate, CalendarError> {
        let day = self.day.min(self.month.length(civil::is_leap_year(i64::from(year))));
        CalendarDate::of(year, self.month.number(), day)
    }

    fn checked(month: i64, day: i64) -> Result<Self, CalendarError> {
        // Year 0 is a leap year, so this accepts February 29.
        let date = CalendarDate::checked(0, month, day)?;
        Ok(Self::from(date))
    }
}

impl From<CalendarDate> for MonthDay {
    fn from(date: CalendarDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Temporal for MonthDay {
    const KIND: &'static str = "MonthDay";

    fn field(&self, field: Field) -> Result<i64, CalendarError> {
        match field {
            Field::MonthOfYear => Ok(i64::from(self.month.number())),
            Field::DayOfMonth => Ok(i64::from(self.day)),
            _ => Err(CalendarError::UnsupportedField {
                field,
                target: Self::KIND,
            }),
        }
    }

    fn from_fields(fields: &ParsedFields) -> Result<Self, CalendarError> {
        let [month, day] = fields.require(Self::KIND, [Field::MonthOfYear, Field::DayOfMonth])?;
        Self::checked(month, day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month.number(), self.day)
    }
}
