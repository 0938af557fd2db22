//! Zone identifiers and their UTC offsets.

use std::fmt;
use std::str::FromStr;

use chrono::{Offset, TimeZone};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::instant::Instant;

/// A rule set mapping instants to local wall-clock offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    kind: ZoneKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoneKind {
    Utc,
    Local,
    Fixed(i32),
    Region(Tz),
}

impl Zone {
    /// Largest accepted offset magnitude, in seconds (18 hours).
    pub const MAX_OFFSET: i32 = 18 * 3600;

    /// Resolves a zone identifier.
    ///
    /// Accepts `UTC`, `Z`, fixed offsets `+HH:MM` / `-HH:MM` / `+HH`, and
    /// `Region/City` names from the bundled IANA database.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownZone`] if the identifier is not
    /// recognised or a fixed offset exceeds ±18:00.
    pub fn of(id: &str) -> Result<Self, CalendarError> {
        let unknown = || CalendarError::UnknownZone { id: id.to_string() };
        let kind = match id {
            "UTC" | "Z" => ZoneKind::Utc,
            _ if id.starts_with(['+', '-']) => {
                ZoneKind::Fixed(parse_offset(id).ok_or_else(unknown)?)
            }
            _ => ZoneKind::Region(id.parse::<Tz>().map_err(|_| unknown())?),
        };
        debug!(zone = id, "resolved zone identifier");
        Ok(Self { kind })
    }

    /// The UTC zone.
    pub fn utc() -> Self {
        Self {
            kind: ZoneKind::Utc,
        }
    }

    /// The process local zone, as reported by the operating system.
    pub fn local() -> Self {
        Self {
            kind: ZoneKind::Local,
        }
    }

    /// A zone with a constant offset from UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownZone`] if the offset exceeds ±18:00.
    pub fn fixed(offset_seconds: i32) -> Result<Self, CalendarError> {
        if offset_seconds.abs() > Self::MAX_OFFSET {
            return Err(CalendarError::UnknownZone {
                id: format_offset(offset_seconds),
            });
        }
        Ok(Self {
            kind: ZoneKind::Fixed(offset_seconds),
        })
    }

    /// Returns the offset from UTC, in seconds, in effect at `instant`.
    pub fn offset_at(&self, instant: Instant) -> i32 {
        let offset = match self.kind {
            ZoneKind::Utc => 0,
            ZoneKind::Fixed(seconds) => seconds,
            ZoneKind::Region(tz) => match utc_naive(instant) {
                Some(naive) => tz.offset_from_utc_datetime(&naive).fix().local_minus_utc(),
                None => 0,
            },
            ZoneKind::Local => match utc_naive(instant) {
                Some(naive) => chrono::Local.offset_from_utc_datetime(&naive).local_minus_utc(),
                None => 0,
            },
        };
        trace!(zone = %self, offset, "zone offset");
        offset
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ZoneKind::Utc => f.write_str("UTC"),
            ZoneKind::Local => f.write_str("local"),
            ZoneKind::Fixed(seconds) => f.write_str(&format_offset(seconds)),
            ZoneKind::Region(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for Zone {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

fn utc_naive(instant: Instant) -> Option<chrono::NaiveDateTime> {
    chrono::DateTime::from_timestamp(instant.epoch_second(), instant.nano())
        .map(|utc| utc.naive_utc())
}

/// Parses `+HH`, `+HH:MM` or `+HH:MM:SS` (or `-`) into seconds.
fn parse_offset(id: &str) -> Option<i32> {
    let sign = match id.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let mut total = 0;
    for (i, part) in id[1..].split(':').enumerate() {
        if i > 2 || part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: i32 = part.parse().ok()?;
        let limit = if i == 0 { 18 } else { 59 };
        if value > limit {
            return None;
        }
        total += value * [3600, 60, 1][i];
    }
    if total > Zone::MAX_OFFSET {
        return None;
    }
    Some(sign * total)
}

fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let (h, m, s) = (abs / 3600, abs / 60 % 60, abs % 60);
    if s == 0 {
        format!("{sign}{h:02}:{m:02}")
    } else {
        format!("{sign}{h:02}:{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(seconds: i64) -> Instant {
        Instant::from_epoch_second(seconds, 0).unwrap()
    }

    #[test]
    fn utc_aliases() {
        assert_eq!(Zone::of("UTC").unwrap(), Zone::utc());
        assert_eq!(Zone::of("Z").unwrap(), Zone::utc());
        assert_eq!(Zone::utc().offset_at(instant(0)), 0);
    }

    #[test]
    fn region_tokyo() {
        let tokyo = Zone::of("Asia/Tokyo").unwrap();
        assert_eq!(tokyo.offset_at(instant(1_716_402_552)), 9 * 3600);
        assert_eq!(tokyo.to_string(), "Asia/Tokyo");
    }

    #[test]
    fn region_paris_follows_dst() {
        let paris = Zone::of("Europe/Paris").unwrap();
        // 2024-05-22 is summer time, 2024-01-15 is not.
        assert_eq!(paris.offset_at(instant(1_716_402_552)), 2 * 3600);
        assert_eq!(paris.offset_at(instant(1_705_276_800)), 3600);
    }

    #[test]
    fn unknown_region() {
        assert_eq!(
            Zone::of("Mars/Olympus_Mons").unwrap_err(),
            CalendarError::UnknownZone {
                id: "Mars/Olympus_Mons".to_string()
            }
        );
        assert!(Zone::of("").is_err());
    }

    #[test]
    fn fixed_offsets() {
        assert_eq!(Zone::of("+09:00").unwrap().offset_at(instant(0)), 32_400);
        assert_eq!(Zone::of("-03:30").unwrap().offset_at(instant(0)), -12_600);
        assert_eq!(Zone::of("+05").unwrap().offset_at(instant(0)), 18_000);
        assert_eq!(Zone::of("-03:00").unwrap().to_string(), "-03:00");
        assert!(Zone::of("+19:00").is_err());
        assert!(Zone::of("+18:01").is_err());
        assert!(Zone::of("+9:00").is_err());
        assert!(Zone::fixed(Zone::MAX_OFFSET + 1).is_err());
        assert_eq!(Zone::fixed(-3600).unwrap().to_string(), "-01:00");
    }

    #[test]
    fn local_offset_is_bounded() {
        let offset = Zone::local().offset_at(instant(1_716_402_552));
        assert!(offset.abs() <= Zone::MAX_OFFSET);
    }
}
