//! Now command: read the clock and print today's date, time and timestamp.

use anyhow::Result;
use tracing::{info, info_span};

use almanac_calendar::{CalendarDate, Clock, ClockTime, Timestamp, Zone};

use crate::cli::NowArgs;
use crate::config::AlmanacConfig;
use crate::convert;

/// The current reading in one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowReport {
    pub zone: String,
    pub date: CalendarDate,
    pub time: ClockTime,
    pub timestamp: Timestamp,
}

/// Reads `clock` once and resolves the reading in `zone`.
pub fn report<C: Clock + ?Sized>(clock: &C, zone: Option<&Zone>) -> NowReport {
    let timestamp = Timestamp::now(clock, zone);
    NowReport {
        zone: zone.map_or_else(|| Zone::local().to_string(), Zone::to_string),
        date: timestamp.to_date(),
        time: timestamp.to_time(),
        timestamp,
    }
}

pub fn run(args: NowArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("now").entered();
    let clock = convert::build_clock(&config.clock)?;
    let zone = match args.zone.as_deref() {
        Some(id) => Some(convert::parse_zone(id)?),
        None => convert::build_zone(&config.clock)?,
    };

    let report = report(clock.as_ref(), zone.as_ref());
    info!(zone = %report.zone, "clock read");
    println!("zone:      {}", report.zone);
    println!("date:      {}", report.date);
    println!("time:      {}", report.time);
    println!("timestamp: {}", report.timestamp);
    Ok(())
}
