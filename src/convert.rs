//! Pure conversion functions: TOML config structs -> library types.

use anyhow::{Context, Result};

use almanac_calendar::{CalendarDate, Clock, FixedClock, Instant, Pattern, SystemClock, Zone};

use crate::config::{ClockToml, TourToml};

/// Resolves a zone identifier, naming it in the error.
pub fn parse_zone(id: &str) -> Result<Zone> {
    Zone::of(id).with_context(|| format!("invalid zone: {id:?}"))
}

/// Compiles a pattern, naming it in the error.
pub fn parse_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::compile(pattern).with_context(|| format!("invalid pattern: {pattern:?}"))
}

/// Parses an ISO `yyyy-MM-dd` date, naming it in the error.
pub fn parse_iso_date(text: &str) -> Result<CalendarDate> {
    text.parse::<CalendarDate>()
        .with_context(|| format!("invalid ISO date: {text:?}"))
}

/// Returns the configured zone, or `None` for the process local zone.
pub fn build_zone(clock: &ClockToml) -> Result<Option<Zone>> {
    clock.zone.as_deref().map(parse_zone).transpose()
}

/// Returns a clock frozen at `fixed_instant`, or the system clock.
pub fn build_clock(clock: &ClockToml) -> Result<Box<dyn Clock>> {
    match clock.fixed_instant {
        Some(seconds) => {
            let instant = Instant::from_epoch_second(seconds, 0)
                .with_context(|| format!("invalid fixed_instant: {seconds}"))?;
            Ok(Box::new(FixedClock::new(instant)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Validated inputs for the guided tour.
#[derive(Debug)]
pub struct TourSettings {
    /// Zone standing in for "local"; `None` means the process local zone.
    pub local_zone: Option<Zone>,
    pub zones: Vec<Zone>,
    pub birthday: CalendarDate,
    pub reference_date: CalendarDate,
    pub pattern: Pattern,
}

/// Builds [`TourSettings`] from the TOML tour and clock sections.
pub fn build_tour_settings(tour: &TourToml, clock: &ClockToml) -> Result<TourSettings> {
    let zones = tour
        .zones
        .iter()
        .map(|id| parse_zone(id))
        .collect::<Result<Vec<_>>>()
        .context("invalid [tour].zones")?;
    Ok(TourSettings {
        local_zone: build_zone(clock)?,
        zones,
        birthday: parse_iso_date(&tour.birthday).context("invalid [tour].birthday")?,
        reference_date: parse_iso_date(&tour.reference_date)
            .context("invalid [tour].reference_date")?,
        pattern: parse_pattern(&tour.pattern)?,
    })
}
