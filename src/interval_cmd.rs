//! Period and seconds commands: measure the interval between two values
//! written in a pattern.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use almanac_calendar::{CalendarDate, Duration, Period, Timestamp, period_between, seconds_between};

use crate::cli::{PeriodArgs, SecondsArgs};
use crate::config::AlmanacConfig;
use crate::convert;

/// Parses both dates with `pattern` and returns the period between them.
pub fn period(from: &str, to: &str, pattern: &str) -> Result<Period> {
    let pattern = convert::parse_pattern(pattern)?;
    let start = CalendarDate::parse(from, &pattern)
        .with_context(|| format!("invalid --from date {from:?} for pattern \"{pattern}\""))?;
    let end = CalendarDate::parse(to, &pattern)
        .with_context(|| format!("invalid --to date {to:?} for pattern \"{pattern}\""))?;
    debug!(%start, %end, "parsed dates");
    Ok(period_between(start, end))
}

/// Parses both timestamps with `pattern` and returns the duration between them.
pub fn seconds(from: &str, to: &str, pattern: &str) -> Result<Duration> {
    let pattern = convert::parse_pattern(pattern)?;
    let start = Timestamp::parse(from, &pattern)
        .with_context(|| format!("invalid --from timestamp {from:?} for pattern \"{pattern}\""))?;
    let end = Timestamp::parse(to, &pattern)
        .with_context(|| format!("invalid --to timestamp {to:?} for pattern \"{pattern}\""))?;
    debug!(%start, %end, "parsed timestamps");
    Ok(seconds_between(start, end))
}

pub fn run_period(args: PeriodArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("period").entered();
    let pattern = args.pattern.as_deref().unwrap_or(&config.format.date_pattern);
    let p = period(&args.from, &args.to, pattern)?;
    info!(years = p.years(), months = p.months(), days = p.days(), "period computed");
    println!("{p}");
    println!(
        "{} years, {} months, {} days",
        p.years(),
        p.months(),
        p.days()
    );
    Ok(())
}

pub fn run_seconds(args: SecondsArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("seconds").entered();
    let pattern = args.pattern.as_deref().unwrap_or(&config.format.timestamp_pattern);
    let d = seconds(&args.from, &args.to, pattern)?;
    info!(seconds = d.seconds(), nanos = d.nanos(), "duration computed");
    println!("{}", d.seconds());
    println!("{d}");
    Ok(())
}
