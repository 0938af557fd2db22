//! Symbolic month of year.

use std::fmt;

use crate::civil::{DAYS_PER_MONTH, MONTH_START_DOY};
use crate::error::CalendarError;

/// A month of the Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Returns the month with number `n` (1..=12), or `None`.
    pub fn from_number(n: u8) -> Option<Self> {
        MONTHS.get(usize::from(n).wrapping_sub(1)).copied()
    }

    /// Returns the month for an already-validated number in 1..=12.
    pub(crate) fn from_valid(n: u8) -> Self {
        MONTHS[usize::from(n - 1)]
    }

    /// Returns the month with number `n`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `n` is not in 1..=12.
    pub fn of(n: u8) -> Result<Self, CalendarError> {
        Self::from_number(n).ok_or(CalendarError::InvalidMonth {
            value: i64::from(n),
        })
    }

    /// Returns the month number (1..=12).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case English name, e.g. `DECEMBER`.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "JANUARY",
            Month::February => "FEBRUARY",
            Month::March => "MARCH",
            Month::April => "APRIL",
            Month::May => "MAY",
            Month::June => "JUNE",
            Month::July => "JULY",
            Month::August => "AUGUST",
            Month::September => "SEPTEMBER",
            Month::October => "OCTOBER",
            Month::November => "NOVEMBER",
            Month::December => "DECEMBER",
        }
    }

    /// Returns the number of days in this month.
    pub fn length(self, leap_year: bool) -> u8 {
        match self {
            Month::February if leap_year => 29,
            m => DAYS_PER_MONTH[m as usize],
        }
    }

    /// Returns the largest possible length, 29 for February.
    pub fn max_length(self) -> u8 {
        self.length(true)
    }

    /// Returns the day of year on which this month starts.
    pub fn first_day_of_year(self, leap_year: bool) -> u16 {
        let shift = u16::from(leap_year && self > Month::February);
        MONTH_START_DOY[self as usize] + shift
    }

    /// Returns the month `months` after this one, wrapping around the year.
    pub fn plus(self, months: i64) -> Self {
        let index = (i64::from(self as u8) - 1 + months).rem_euclid(12);
        MONTHS[index as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
