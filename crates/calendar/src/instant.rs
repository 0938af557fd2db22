//! Absolute, zone-independent points on the time line.

use std::fmt;

use crate::civil::NANOS_PER_SECOND;
use crate::clock::Clock;
use crate::error::CalendarError;
use crate::timestamp::Timestamp;

/// A point on the UTC time line, counted from 1970-01-01T00:00:00Z.
///
/// The range is `-9999-01-02T00:00:00Z..=9999-12-30T23:59:59.999999999Z`,
/// one day inside the date range at each end so that any UTC offset can be
/// applied without leaving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    seconds: i64,
    nanos: u32,
}

impl Instant {
    /// 1970-01-01T00:00:00Z.
    pub const EPOCH: Instant = Instant {
        seconds: 0,
        nanos: 0,
    };

    /// The earliest representable instant.
    pub const MIN: Instant = Instant {
        seconds: -377_705_030_400,
        nanos: 0,
    };

    /// The latest representable instant.
    pub const MAX: Instant = Instant {
        seconds: 253_402_214_399,
        nanos: 999_999_999,
    };

    /// Creates an instant from epoch seconds and a nanosecond adjustment.
    ///
    /// The adjustment may be negative or exceed one second; it is folded
    /// into the seconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InstantOutOfRange`] outside
    /// [`Instant::MIN`]..=[`Instant::MAX`].
    pub fn from_epoch_second(seconds: i64, nano_adjustment: i64) -> Result<Self, CalendarError> {
        let carried = seconds
            .checked_add(nano_adjustment.div_euclid(NANOS_PER_SECOND))
            .ok_or(CalendarError::InstantOutOfRange { seconds })?;
        let instant = Self {
            seconds: carried,
            nanos: nano_adjustment.rem_euclid(NANOS_PER_SECOND) as u32,
        };
        if instant < Self::MIN || instant > Self::MAX {
            return Err(CalendarError::InstantOutOfRange { seconds: carried });
        }
        Ok(instant)
    }

    /// Creates an instant from epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InstantOutOfRange`] outside the supported range.
    pub fn from_epoch_milli(millis: i64) -> Result<Self, CalendarError> {
        Self::from_epoch_second(millis.div_euclid(1000), millis.rem_euclid(1000) * 1_000_000)
    }

    /// Reads the current instant from `clock`.
    pub fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        clock.instant()
    }

    /// Seconds since the epoch, floored.
    pub fn epoch_second(self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past [`Instant::epoch_second`], 0..1e9.
    pub fn nano(self) -> u32 {
        self.nanos
    }

    /// Milliseconds since the epoch, floored.
    pub fn to_epoch_milli(self) -> i64 {
        self.seconds * 1000 + i64::from(self.nanos / 1_000_000)
    }

    pub(crate) fn epoch_nanos(self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos)
    }
}

impl fmt::Display for Instant {
    /// Writes ISO form in UTC, always with seconds, e.g. `2024-05-22T18:29:12.188Z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let utc = Timestamp::from_instant(*self, 0);
        write!(f, "{}T{:02}:{:02}:{:02}", utc.to_date(), utc.hour(), utc.minute(), utc.second())?;
        match self.nanos {
            0 => {}
            n if n % 1_000_000 == 0 => write!(f, ".{:03}", n / 1_000_000)?,
            n if n % 1_000 == 0 => write!(f, ".{:06}", n / 1_000)?,
            n => write!(f, ".{n:09}")?,
        }
        f.write_str("Z")
    }
}
