//! Date combined with a time of day.

use std::fmt;
use std::str::FromStr;

use crate::civil::{self, NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::clock::Clock;
use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::field::{Field, Unit};
use crate::instant::Instant;
use crate::month::Month;
use crate::pattern::{ParsedFields, Pattern, Temporal};
use crate::time::ClockTime;
use crate::zone::Zone;

/// A local date-time with no zone, such as `2024-12-25T12:10`.
///
/// Ordered by date, then time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    date: CalendarDate,
    time: ClockTime,
}

impl Timestamp {
    /// Creates a timestamp from date components plus hour and minute.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] or
    /// [`CalendarError::InvalidTime`] on invalid components.
    pub fn of(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self, CalendarError> {
        Self::of_nano(year, month, day, hour, minute, 0, 0)
    }

    /// Creates a timestamp down to the second.
    ///
    /// # Errors
    ///
    /// Same as [`Timestamp::of`].
    pub fn of_second(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        Self::of_nano(year, month, day, hour, minute, second, 0)
    }

    /// Creates a timestamp down to the nanosecond.
    ///
    /// # Errors
    ///
    /// Same as [`Timestamp::of`].
    pub fn of_nano(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nano: u32,
    ) -> Result<Self, CalendarError> {
        let date = CalendarDate::of(year, month, day)?;
        let time = ClockTime::of_nano(hour, minute, second, nano)?;
        Ok(Self::of_date_time(date, time))
    }

    /// Composes a date and a time. Cannot fail.
    pub const fn of_date_time(date: CalendarDate, time: ClockTime) -> Self {
        Self { date, time }
    }

    /// Returns the current local date-time as read from `clock`.
    ///
    /// The reading is resolved in `zone`, or in the process local offset
    /// when `zone` is `None`.
    pub fn now<C: Clock + ?Sized>(clock: &C, zone: Option<&Zone>) -> Self {
        let instant = clock.instant();
        let zone = zone.copied().unwrap_or_else(Zone::local);
        Self::from_instant(instant, zone.offset_at(instant))
    }

    /// Returns the local date-time of `instant` at a UTC offset in seconds.
    ///
    /// `offset_seconds` is clamped to ±18 hours, which keeps every
    /// representable instant inside the supported date range.
    pub fn from_instant(instant: Instant, offset_seconds: i32) -> Self {
        let offset = i64::from(offset_seconds.clamp(-Zone::MAX_OFFSET, Zone::MAX_OFFSET));
        let local = instant.epoch_second() + offset;
        let (year, month, day) = civil::civil_from_days(local.div_euclid(SECONDS_PER_DAY));
        let nano_of_day =
            local.rem_euclid(SECONDS_PER_DAY) * NANOS_PER_SECOND + i64::from(instant.nano());
        Self {
            date: CalendarDate::new_unchecked(year as i32, month, day),
            time: ClockTime::from_valid_nano_of_day(nano_of_day),
        }
    }

    /// Returns the instant this local date-time names at a UTC offset.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InstantOutOfRange`] near the ends of the
    /// supported range.
    pub fn to_instant(self, offset_seconds: i32) -> Result<Instant, CalendarError> {
        let seconds = self.date.to_epoch_day() * SECONDS_PER_DAY
            + i64::from(self.time.to_second_of_day())
            - i64::from(offset_seconds);
        Instant::from_epoch_second(seconds, i64::from(self.time.nano()))
    }

    /// Returns the date part.
    pub fn to_date(self) -> CalendarDate {
        self.date
    }

    /// Returns the time part.
    pub fn to_time(self) -> ClockTime {
        self.time
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the symbolic month.
    pub fn month(self) -> Month {
        self.date.month()
    }

    /// Returns the month number (1..=12).
    pub fn month_value(self) -> u8 {
        self.date.month_value()
    }

    /// Returns the day of month.
    pub fn day(self) -> u8 {
        self.date.day()
    }

    /// Returns the day of year.
    pub fn day_of_year(self) -> u16 {
        self.date.day_of_year()
    }

    /// Returns the hour of day.
    pub fn hour(self) -> u8 {
        self.time.hour()
    }

    /// Returns the minute of hour.
    pub fn minute(self) -> u8 {
        self.time.minute()
    }

    /// Returns the second of minute.
    pub fn second(self) -> u8 {
        self.time.second()
    }

    /// Returns the nanosecond of second.
    pub fn nano(self) -> u32 {
        self.time.nano()
    }

    /// Returns the value of any field.
    pub fn get(self, field: Field) -> Result<i64, CalendarError> {
        if field.is_date_based() {
            self.date.get(field)
        } else {
            self.time.get(field)
        }
    }

    /// Always `true`: a timestamp carries every field.
    pub fn is_field_supported(self, _field: Field) -> bool {
        true
    }

    /// Always `true`: a timestamp can move by any unit.
    pub fn is_unit_supported(self, _unit: Unit) -> bool {
        true
    }

    /// Returns a copy with one field replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] or
    /// [`CalendarError::InvalidTime`] if the result is invalid.
    pub fn with_field(self, field: Field, value: i64) -> Result<Self, CalendarError> {
        if field.is_date_based() {
            Ok(Self::of_date_time(self.date.with_field(field, value)?, self.time))
        } else {
            Ok(Self::of_date_time(self.date, self.time.with_field(field, value)?))
        }
    }

    /// Returns a copy with the year replaced; fails like [`CalendarDate::with_year`].
    pub fn with_year(self, year: i32) -> Result<Self, CalendarError> {
        self.with_field(Field::Year, i64::from(year))
    }

    /// Returns a copy with the month replaced; fails like [`CalendarDate::with_month`].
    pub fn with_month(self, month: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::MonthOfYear, i64::from(month))
    }

    /// Returns a copy with the day of month replaced; fails like [`CalendarDate::with_day`].
    pub fn with_day(self, day: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::DayOfMonth, i64::from(day))
    }

    /// Returns a copy with the hour replaced.
    pub fn with_hour(self, hour: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::HourOfDay, i64::from(hour))
    }

    /// Returns a copy with the minute replaced.
    pub fn with_minute(self, minute: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::MinuteOfHour, i64::from(minute))
    }

    /// Returns a copy with the second replaced.
    pub fn with_second(self, second: u8) -> Result<Self, CalendarError> {
        self.with_field(Field::SecondOfMinute, i64::from(second))
    }

    /// Returns a copy with the nanosecond replaced.
    pub fn with_nano(self, nano: u32) -> Result<Self, CalendarError> {
        self.with_field(Field::NanoOfSecond, i64::from(nano))
    }

    /// Returns a copy with the date part replaced.
    pub fn with_date(self, date: CalendarDate) -> Self {
        Self::of_date_time(date, self.time)
    }

    /// Returns a copy with the time part replaced.
    pub fn with_time(self, time: ClockTime) -> Self {
        Self::of_date_time(self.date, time)
    }

    /// Returns the timestamp `days` days later, keeping the time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] outside the supported range.
    pub fn plus_days(self, days: i64) -> Result<Self, CalendarError> {
        Ok(self.with_date(self.date.plus_days(days)?))
    }

    /// Returns the timestamp `seconds` seconds later on the local time line.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] outside the supported range.
    pub fn plus_seconds(self, seconds: i64) -> Result<Self, CalendarError> {
        let second_of_day = i64::from(self.time.to_second_of_day());
        let total = second_of_day.checked_add(seconds).ok_or_else(|| CalendarError::InvalidDate {
            year: i64::from(self.year()),
            month: i64::from(self.month_value()),
            day: i64::from(self.day()),
            reason: format!("adding {seconds} seconds overflows"),
        })?;
        let date = self.date.plus_days(total.div_euclid(SECONDS_PER_DAY))?;
        let nano_of_day =
            total.rem_euclid(SECONDS_PER_DAY) * NANOS_PER_SECOND + i64::from(self.time.nano());
        Ok(Self::of_date_time(date, ClockTime::from_valid_nano_of_day(nano_of_day)))
    }

    /// Returns `true` if this timestamp is strictly later than `other`.
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// Returns `true` if this timestamp is strictly earlier than `other`.
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }

    /// Returns `true` if both values name the same local date-time.
    pub fn is_equal(self, other: Self) -> bool {
        self == other
    }

    /// Renders this timestamp with `pattern`.
    pub fn format(self, pattern: &Pattern) -> Result<String, CalendarError> {
        pattern.format(&self)
    }

    /// Parses a timestamp that exactly matches `pattern`.
    ///
    /// Year, month, day, hour and minute are required; seconds default to
    /// zero.
    pub fn parse(text: &str, pattern: &Pattern) -> Result<Self, CalendarError> {
        pattern.parse(text)
    }

    /// Nanoseconds since 1970-01-01T00:00 on the local time line.
    pub(crate) fn local_epoch_nanos(self) -> i128 {
        i128::from(self.date.to_epoch_day()) * i128::from(civil::NANOS_PER_DAY)
            + i128::from(self.time.to_nano_of_day())
    }
}

impl Temporal for Timestamp {
    const KIND: &'static str = "Timestamp";

    fn field(&self, field: Field) -> Result<i64, CalendarError> {
        self.get(field)
    }

    fn from_fields(fields: &ParsedFields) -> Result<Self, CalendarError> {
        let [year, month, day, hour, minute] = fields.require(
            Self::KIND,
            [
                Field::Year,
                Field::MonthOfYear,
                Field::DayOfMonth,
                Field::HourOfDay,
                Field::MinuteOfHour,
            ],
        )?;
        let second = fields.get(Field::SecondOfMinute).unwrap_or(0);
        let date = CalendarDate::checked(year, month, day)?;
        let time = ClockTime::checked(hour, minute, second, 0)?;
        Ok(Self::of_date_time(date, time))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for Timestamp {
    type Err = CalendarError;

    /// Parses `<date>T<time>` using the ISO forms of both parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, time) = s.split_once('T').ok_or_else(|| CalendarError::FormatMismatch {
            text: s.to_string(),
            position: 0,
            reason: "expected <date>T<time>".to_string(),
        })?;
        Ok(Self::of_date_time(date.parse()?, time.parse()?))
    }
}
