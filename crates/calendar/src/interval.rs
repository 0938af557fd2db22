//! Elapsed time between two values: seconds-based [`Duration`] and
//! calendar-based [`Period`].

use std::fmt;

use crate::civil::{self, NANOS_PER_SECOND};
use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::field::Unit;
use crate::instant::Instant;
use crate::time::ClockTime;
use crate::timestamp::Timestamp;

/// A value with a position on a linear time line.
///
/// Durations are only measured between two values of the same type, so a
/// local [`Timestamp`] is never mixed with an absolute [`Instant`].
pub trait TimeLine: Copy + fmt::Debug {
    /// Nanoseconds from the origin of this type's time line.
    fn nanos_since_origin(self) -> i128;
}

impl TimeLine for Timestamp {
    fn nanos_since_origin(self) -> i128 {
        self.local_epoch_nanos()
    }
}

impl TimeLine for Instant {
    fn nanos_since_origin(self) -> i128 {
        self.epoch_nanos()
    }
}

impl TimeLine for ClockTime {
    fn nanos_since_origin(self) -> i128 {
        i128::from(self.to_nano_of_day())
    }
}

/// An amount of elapsed time in seconds plus a nanosecond remainder.
///
/// Seconds are floored, so `-0.5s` is `seconds = -1, nanos = 500_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    seconds: i64,
    nanos: u32,
}

impl Duration {
    /// No elapsed time.
    pub const ZERO: Duration = Duration {
        seconds: 0,
        nanos: 0,
    };

    /// Returns `b - a`.
    pub fn between<T: TimeLine>(a: T, b: T) -> Self {
        Self::from_total_nanos(b.nanos_since_origin() - a.nanos_since_origin())
    }

    /// A duration of whole seconds.
    pub fn of_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// A duration of nanoseconds, normalized into seconds and a remainder.
    pub fn of_nanos(nanos: i64) -> Self {
        Self::from_total_nanos(i128::from(nanos))
    }

    /// Whole seconds, floored.
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past [`Duration::seconds`], 0..1e9.
    pub fn nanos(self) -> u32 {
        self.nanos
    }

    /// Returns the amount in `unit`.
    ///
    /// Only [`Unit::Seconds`] and [`Unit::Nanos`] are stored; every other
    /// unit fails. Use [`Duration::to_minutes`] and friends for an explicit
    /// truncating conversion.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedUnit`] for any other unit.
    pub fn get(self, unit: Unit) -> Result<i64, CalendarError> {
        match unit {
            Unit::Seconds => Ok(self.seconds),
            Unit::Nanos => Ok(i64::from(self.nanos)),
            _ => Err(CalendarError::UnsupportedUnit {
                unit,
                target: "Duration",
            }),
        }
    }

    /// Total nanoseconds.
    pub fn to_nanos(self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos)
    }

    /// Whole minutes, truncated toward zero.
    pub fn to_minutes(self) -> i64 {
        self.truncated_seconds() / 60
    }

    /// Whole hours, truncated toward zero.
    pub fn to_hours(self) -> i64 {
        self.truncated_seconds() / 3600
    }

    /// Whole days of 24 hours, truncated toward zero.
    pub fn to_days(self) -> i64 {
        self.truncated_seconds() / civil::SECONDS_PER_DAY
    }

    /// Returns `true` for a zero-length duration.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `true` if the duration runs backwards.
    pub fn is_negative(self) -> bool {
        self.seconds < 0
    }

    fn truncated_seconds(self) -> i64 {
        if self.seconds < 0 && self.nanos > 0 {
            self.seconds + 1
        } else {
            self.seconds
        }
    }

    fn from_total_nanos(total: i128) -> Self {
        let per_second = i128::from(NANOS_PER_SECOND);
        Self {
            seconds: total.div_euclid(per_second) as i64,
            nanos: total.rem_euclid(per_second) as u32,
        }
    }
}

impl fmt::Display for Duration {
    /// Writes ISO-8601 form, e.g. `PT10M`, `PT1H0.5S`, `PT-0.5S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        let total = self.truncated_seconds();
        let (hours, minutes, secs) = (total / 3600, total % 3600 / 60, total % 60);
        f.write_str("PT")?;
        if hours != 0 {
            write!(f, "{hours}H")?;
        }
        if minutes != 0 {
            write!(f, "{minutes}M")?;
        }
        if secs == 0 && self.nanos == 0 {
            return Ok(());
        }
        let negative_fraction = self.seconds < 0 && self.nanos > 0;
        if negative_fraction && secs == 0 {
            f.write_str("-0")?;
        } else {
            write!(f, "{secs}")?;
        }
        if self.nanos > 0 {
            let fraction = if negative_fraction {
                NANOS_PER_SECOND as u32 - self.nanos
            } else {
                self.nanos
            };
            let digits = format!("{fraction:09}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        f.write_str("S")
    }
}

/// An amount of elapsed time in calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// The empty period.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a period from its three components.
    pub fn of(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Returns the period from `start` (inclusive) to `end` (exclusive).
    ///
    /// Whole months are counted first and split into years and months; the
    /// remaining days are counted from `start` advanced by those months.
    /// When `end` is before `start` every component is zero or negative.
    pub fn between(start: CalendarDate, end: CalendarDate) -> Self {
        let mut total_months = end.proleptic_month() - start.proleptic_month();
        let mut days = i64::from(end.day()) - i64::from(start.day());
        if total_months > 0 && days < 0 {
            total_months -= 1;
            let target = start.proleptic_month() + total_months;
            let (year, month) = (target.div_euclid(12), target.rem_euclid(12) + 1);
            let day = start.day().min(civil::days_in_month(year, month));
            days = end.to_epoch_day() - civil::days_from_civil(year, month as u8, day);
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.length_of_month());
        }
        Self {
            years: (total_months / 12) as i32,
            months: (total_months % 12) as i32,
            days: days as i32,
        }
    }

    /// Returns the years component.
    pub fn years(self) -> i32 {
        self.years
    }

    /// Returns the months component, within -11..=11.
    pub fn months(self) -> i32 {
        self.months
    }

    /// Returns the days component.
    pub fn days(self) -> i32 {
        self.days
    }

    /// Returns the component stored for `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedUnit`] for anything other than
    /// years, months and days.
    pub fn get(self, unit: Unit) -> Result<i64, CalendarError> {
        match unit {
            Unit::Years => Ok(i64::from(self.years)),
            Unit::Months => Ok(i64::from(self.months)),
            Unit::Days => Ok(i64::from(self.days)),
            _ => Err(CalendarError::UnsupportedUnit {
                unit,
                target: "Period",
            }),
        }
    }

    /// Years and months folded into months; days are ignored.
    pub fn to_total_months(self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `true` if any component is negative.
    pub fn is_negative(self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }
}

impl fmt::Display for Period {
    /// Writes ISO-8601 form, e.g. `P39Y9M4D`, `P0D`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

/// Returns the elapsed time `b - a` in seconds plus a nanosecond remainder.
#[tracing::instrument(level = "debug", ret)]
pub fn seconds_between<T: TimeLine>(a: T, b: T) -> Duration {
    Duration::between(a, b)
}

/// Returns the calendar period from `a` to `b`, largest unit first.
#[tracing::instrument(level = "debug", ret)]
pub fn period_between(a: CalendarDate, b: CalendarDate) -> Period {
    Period::between(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::of(y, m, d).unwrap()
    }

    #[test]
    fn christmas_ten_minutes() {
        let noon = Timestamp::of(2024, 12, 25, 12, 0).unwrap();
        let ten_past = Timestamp::of(2024, 12, 25, 12, 10).unwrap();
        let d = seconds_between(noon, ten_past);
        assert_eq!(d.seconds(), 600);
        assert_eq!(d.nanos(), 0);
        assert_eq!(d.to_string(), "PT10M");
        assert_eq!(seconds_between(ten_past, noon).seconds(), -600);
    }

    #[test]
    fn duration_only_exposes_seconds_and_nanos() {
        let d = Duration::of_seconds(600);
        assert_eq!(d.get(Unit::Seconds).unwrap(), 600);
        assert_eq!(d.get(Unit::Nanos).unwrap(), 0);
        assert_eq!(
            d.get(Unit::Minutes).unwrap_err(),
            CalendarError::UnsupportedUnit {
                unit: Unit::Minutes,
                target: "Duration",
            }
        );
        assert!(d.get(Unit::Days).is_err());
        assert_eq!(d.to_minutes(), 10);
    }

    #[test]
    fn duration_from_epoch() {
        let now = Instant::from_epoch_second(1_716_416_560, 250_000_000).unwrap();
        let d = seconds_between(Instant::EPOCH, now);
        assert_eq!(d.seconds(), 1_716_416_560);
        assert_eq!(d.nanos(), 250_000_000);
        assert_eq!(d.to_days(), 19_865);
    }

    #[test]
    fn negative_fraction_is_floored() {
        let d = Duration::of_nanos(-500_000_000);
        assert_eq!(d.seconds(), -1);
        assert_eq!(d.nanos(), 500_000_000);
        assert!(d.is_negative());
        assert_eq!(d.to_nanos(), -500_000_000);
        assert_eq!(d.to_minutes(), 0);
        assert_eq!(d.to_string(), "PT-0.5S");
    }

    #[test]
    fn duration_display() {
        assert_eq!(Duration::ZERO.to_string(), "PT0S");
        assert_eq!(Duration::of_seconds(3600).to_string(), "PT1H");
        assert_eq!(Duration::of_seconds(3661).to_string(), "PT1H1M1S");
        assert_eq!(Duration::of_nanos(1_500_000_000).to_string(), "PT1.5S");
        assert_eq!(Duration::of_seconds(-90).to_string(), "PT-1M-30S");
    }

    #[test]
    fn clock_times() {
        let a = ClockTime::of(9, 0).unwrap();
        let b = ClockTime::of_nano(9, 0, 1, 5).unwrap();
        let d = seconds_between(a, b);
        assert_eq!((d.seconds(), d.nanos()), (1, 5));
    }

    #[test]
    fn period_birthday() {
        let p = period_between(date(1984, 8, 18), date(2024, 5, 22));
        assert_eq!((p.years(), p.months(), p.days()), (39, 9, 4));
        assert_eq!(p.get(Unit::Years).unwrap(), 39);
        assert_eq!(p.get(Unit::Months).unwrap(), 9);
        assert_eq!(p.get(Unit::Days).unwrap(), 4);
        assert_eq!(p.to_string(), "P39Y9M4D");
        assert_eq!(p.to_total_months(), 477);
    }

    #[test]
    fn period_rejects_time_units() {
        let p = Period::of(1, 2, 3);
        assert!(matches!(
            p.get(Unit::Hours),
            Err(CalendarError::UnsupportedUnit { unit: Unit::Hours, .. })
        ));
    }

    #[test]
    fn period_leap_day_to_common_year() {
        let p = period_between(date(2024, 2, 29), date(2025, 2, 28));
        assert_eq!(p, Period::of(0, 11, 30));
        let p = period_between(date(2024, 2, 29), date(2025, 3, 1));
        assert_eq!(p, Period::of(1, 0, 1));
        let p = period_between(date(2024, 2, 29), date(2028, 2, 29));
        assert_eq!(p, Period::of(4, 0, 0));
    }

    #[test]
    fn period_month_end_clamping() {
        let p = period_between(date(2024, 1, 31), date(2024, 3, 1));
        assert_eq!(p, Period::of(0, 1, 1));
        let p = period_between(date(2023, 1, 31), date(2023, 2, 28));
        assert_eq!(p, Period::of(0, 0, 28));
    }

    #[test]
    fn period_negative() {
        let p = period_between(date(2024, 5, 22), date(1984, 8, 18));
        assert_eq!(p, Period::of(-39, -9, -4));
        assert!(p.is_negative());
        let p = period_between(date(2024, 3, 10), date(2024, 2, 20));
        assert_eq!(p, Period::of(0, 0, -19));
    }

    #[test]
    fn period_zero() {
        let d = date(2024, 5, 22);
        let p = period_between(d, d);
        assert!(p.is_zero());
        assert_eq!(p.to_string(), "P0D");
    }

    #[test]
    fn period_plus_months_reconstructs_end() {
        let start = date(1984, 8, 18);
        let end = date(2024, 5, 22);
        let p = period_between(start, end);
        let rebuilt = start
            .plus_months(p.to_total_months())
            .unwrap()
            .plus_days(i64::from(p.days()))
            .unwrap();
        assert_eq!(rebuilt, end);
    }
}
