//! Time of day without a date.

use std::fmt;
use std::str::FromStr;

use crate::civil::{NANOS_PER_DAY, NANOS_PER_SECOND};
use crate::clock::Clock;
use crate::error::CalendarError;
use crate::field::{Field, Unit};
use crate::pattern::{ParsedFields, Pattern, Temporal};
use crate::timestamp::Timestamp;
use crate::zone::Zone;

/// A wall-clock time of day with nanosecond precision, such as `12:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
    nano: u32,
}

impl ClockTime {
    /// `00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime {
        hour: 0,
        minute: 0,
        second: 0,
        nano: 0,
    };

    /// `12:00`.
    pub const NOON: ClockTime = ClockTime {
        hour: 12,
        minute: 0,
        second: 0,
        nano: 0,
    };

    /// The earliest time of day.
    pub const MIN: ClockTime = ClockTime::MIDNIGHT;

    /// `23:59:59.999999999`.
    pub const MAX: ClockTime = ClockTime {
        hour: 23,
        minute: 59,
        second: 59,
        nano: 999_999_999,
    };

    /// Creates a time from hour and minute, with zero seconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] on out-of-range components.
    pub fn of(hour: u8, minute: u8) -> Result<Self, CalendarError> {
        Self::of_nano(hour, minute, 0, 0)
    }

    /// Creates a time from hour, minute and second.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] on out-of-range components.
    pub fn of_second(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        Self::of_nano(hour, minute, second, 0)
    }

    /// Creates a time from all four components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] on out-of-range components.
    pub fn of_nano(hour: u8, minute: u8, second: u8, nano: u32) -> Result<Self, CalendarError> {
        Self::checked(
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
            i64::from(nano),
        )
    }

    /// Returns the current time of day as read from `clock`.
    ///
    /// The reading is resolved in `zone`, or in the process local offset
    /// when `zone` is `None`.
    pub fn now<C: Clock + ?Sized>(clock: &C, zone: Option<&Zone>) -> Self {
        Timestamp::now(clock, zone).to_time()
    }

    /// Returns the hour of day (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute of hour (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second of minute (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the nanosecond of second.
    pub fn nano(self) -> u32 {
        self.nano
    }

    /// Returns the seconds elapsed since midnight.
    pub fn to_second_of_day(self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }

    /// Returns the nanoseconds elapsed since midnight.
    pub fn to_nano_of_day(self) -> i64 {
        i64::from(self.to_second_of_day()) * NANOS_PER_SECOND + i64::from(self.nano)
    }

    /// Returns the value of a time field.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] for date fields.
    pub fn get(self, field: Field) -> Result<i64, CalendarError> {
        match field {
            Field::HourOfDay => Ok(i64::from(self.hour)),
            Field::MinuteOfHour => Ok(i64::from(self.minute)),
            Field::SecondOfMinute => Ok(i64::from(self.second)),
            Field::NanoOfSecond => Ok(i64::from(self.nano)),
            _ => Err(CalendarError::UnsupportedField {
                field,
                target: Self::KIND,
            }),
        }
    }

    /// Returns `true` if `field` can be read from or written to a time.
    pub fn is_field_supported(self, field: Field) -> bool {
        field.is_time_based()
    }

    /// Returns `true` if times can be moved by amounts of `unit`.
    pub fn is_unit_supported(self, unit: Unit) -> bool {
        unit.is_time_based()
    }

    /// Returns a copy with the hour replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if `hour` is not in 0..=23.
    pub fn with_hour(self, hour: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::HourOfDay, i64::from(hour))
    }

    /// Returns a copy with the minute replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if `minute` is not in 0..=59.
    pub fn with_minute(self, minute: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::MinuteOfHour, i64::from(minute))
    }

    /// Returns a copy with the second replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if `second` is not in 0..=59.
    pub fn with_second(self, second: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::SecondOfMinute, i64::from(second))
    }

    /// Returns a copy with the nanosecond replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if `nano` exceeds 999_999_999.
    pub fn with_nano(self, nano: u32) -> Result<Self, CalendarError> {
        self.with_field(Field::NanoOfSecond, i64::from(nano))
    }

    /// Returns a copy with one field replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] for date fields and
    /// [`CalendarError::InvalidTime`] for out-of-range values.
    pub fn with_field(self, field: Field, value: i64) -> Result<Self, CalendarError> {
        let (h, m, s, n) = (
            i64::from(self.hour),
            i64::from(self.minute),
            i64::from(self.second),
            i64::from(self.nano),
        );
        match field {
            Field::HourOfDay => Self::checked(value, m, s, n),
            Field::MinuteOfHour => Self::checked(h, value, s, n),
            Field::SecondOfMinute => Self::checked(h, m, value, n),
            Field::NanoOfSecond => Self::checked(h, m, s, value),
            _ => Err(CalendarError::UnsupportedField {
                field,
                target: Self::KIND,
            }),
        }
    }

    /// Returns `true` if this time is strictly later than `other`.
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// Returns `true` if this time is strictly earlier than `other`.
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }

    /// Returns `true` if both values name the same instant of the day.
    pub fn is_equal(self, other: Self) -> bool {
        self == other
    }

    /// Renders this time with `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if the pattern contains
    /// date tokens.
    pub fn format(self, pattern: &Pattern) -> Result<String, CalendarError> {
        pattern.format(&self)
    }

    /// Parses a time that exactly matches `pattern`.
    ///
    /// Hour and minute are required; seconds default to zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FormatMismatch`] if `text` does not match and
    /// [`CalendarError::IncompleteFields`] if the pattern lacks hour or minute.
    pub fn parse(text: &str, pattern: &Pattern) -> Result<Self, CalendarError> {
        pattern.parse(text)
    }

    /// Builds a time from a nanosecond-of-day already known to be in range.
    pub(crate) fn from_valid_nano_of_day(nano_of_day: i64) -> Self {
        debug_assert!((0..NANOS_PER_DAY).contains(&nano_of_day));
        let seconds = nano_of_day / NANOS_PER_SECOND;
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
            nano: (nano_of_day % NANOS_PER_SECOND) as u32,
        }
    }

    pub(crate) fn checked(hour: i64, minute: i64, second: i64, nano: i64) -> Result<Self, CalendarError> {
        for (field, value) in [
            (Field::HourOfDay, hour),
            (Field::MinuteOfHour, minute),
            (Field::SecondOfMinute, second),
            (Field::NanoOfSecond, nano),
        ] {
            let (min, max) = field.range();
            if !(min..=max).contains(&value) {
                return Err(CalendarError::InvalidTime {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            nano: nano as u32,
        })
    }
}

impl Temporal for ClockTime {
    const KIND: &'static str = "ClockTime";

    fn field(&self, field: Field) -> Result<i64, CalendarError> {
        self.get(field)
    }

    fn from_fields(fields: &ParsedFields) -> Result<Self, CalendarError> {
        let [hour, minute] =
            fields.require(Self::KIND, [Field::HourOfDay, Field::MinuteOfHour])?;
        let second = fields.get(Field::SecondOfMinute).unwrap_or(0);
        Self::checked(hour, minute, second, 0)
    }
}

impl fmt::Display for ClockTime {
    /// Writes `HH:mm`, adding `:ss` when seconds or nanos are non-zero and
    /// a 3, 6 or 9 digit fraction when nanos are non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;
        if self.second == 0 && self.nano == 0 {
            return Ok(());
        }
        write!(f, ":{:02}", self.second)?;
        match self.nano {
            0 => Ok(()),
            n if n % 1_000_000 == 0 => write!(f, ".{:03}", n / 1_000_000),
            n if n % 1_000 == 0 => write!(f, ".{:06}", n / 1_000),
            n => write!(f, ".{n:09}"),
        }
    }
}

impl FromStr for ClockTime {
    type Err = CalendarError;

    /// Parses `HH:mm`, `HH:mm:ss` or `HH:mm:ss.fraction` (1 to 9 digits).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mismatch = |position: usize, reason: &str| CalendarError::FormatMismatch {
            text: s.to_string(),
            position,
            reason: reason.to_string(),
        };
        let (main, fraction) = match s.split_once('.') {
            Some((main, fraction)) => (main, Some(fraction)),
            None => (s, None),
        };

        let mut parts = [0i64; 3];
        let mut count = 0;
        for (i, part) in main.split(':').enumerate() {
            if i >= 3 || part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(mismatch(i * 3, "expected HH:mm[:ss[.fraction]]"));
            }
            parts[i] = part.parse().map_err(|_| mismatch(i * 3, "expected two digits"))?;
            count += 1;
        }
        if count < 2 {
            return Err(mismatch(main.len(), "expected HH:mm[:ss[.fraction]]"));
        }

        let nano = match fraction {
            None => 0,
            Some(_) if count < 3 => {
                return Err(mismatch(main.len(), "fraction requires seconds"));
            }
            Some(digits)
                if (1..=9).contains(&digits.len())
                    && digits.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let value: i64 = digits
                    .parse()
                    .map_err(|_| mismatch(main.len() + 1, "expected fraction digits"))?;
                value * 10i64.pow(9 - digits.len() as u32)
            }
            Some(_) => return Err(mismatch(main.len() + 1, "expected 1 to 9 fraction digits")),
        };
        Self::checked(parts[0], parts[1], parts[2], nano)
    }
}
