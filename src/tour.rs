//! Tour command: a guided walkthrough of construction, queries, `with`
//! updates, intervals and patterns.

use std::fmt;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use almanac_calendar::{
    CalendarDate, Clock, ClockTime, Field, Instant, Month, Timestamp, Unit, period_between,
    seconds_between,
};

use crate::config::AlmanacConfig;
use crate::convert::{self, TourSettings};

/// One labelled result of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourLine {
    pub label: String,
    pub value: String,
}

impl fmt::Display for TourLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<36} {}", self.label, self.value)
    }
}

#[derive(Default)]
struct Transcript {
    lines: Vec<TourLine>,
}

impl Transcript {
    fn push(&mut self, label: impl Into<String>, value: impl fmt::Display) {
        self.lines.push(TourLine {
            label: label.into(),
            value: value.to_string(),
        });
    }
}

/// Runs the walkthrough against `clock` and returns every result in order.
pub fn lines<C: Clock + ?Sized>(clock: &C, settings: &TourSettings) -> Result<Vec<TourLine>> {
    let local = settings.local_zone.as_ref();
    let mut out = Transcript::default();

    // Creating values
    let today = CalendarDate::today(clock, local);
    let now = Timestamp::now(clock, local);
    out.push("today", today);
    out.push("current time", ClockTime::now(clock, local));
    out.push("now", now);
    for zone in &settings.zones {
        out.push(format!("today in {zone}"), CalendarDate::today(clock, Some(zone)));
        out.push(format!("now in {zone}"), Timestamp::now(clock, Some(zone)));
    }

    let noon = ClockTime::NOON;
    let year = settings.reference_date.year();
    let christmas = CalendarDate::of(year, 12, 25).context("christmas date")?;
    let christmas_before = CalendarDate::of_month(year - 1, Month::December, 25)
        .context("previous christmas date")?;
    let christmas_time = Timestamp::of(year, 12, 25, 12, 10).context("christmas timestamp")?;
    let christmas_noon = christmas.at_time(noon);
    out.push("noon", noon);
    out.push("christmas", christmas);
    out.push("previous christmas", christmas_before);
    out.push("christmas at 12:10", christmas_time);
    out.push("christmas at noon", christmas_noon);

    // get
    out.push("get(DayOfMonth)", christmas_noon.get(Field::DayOfMonth)?);
    out.push("day()", christmas_noon.day());
    out.push("get(Year)", christmas_noon.get(Field::Year)?);
    out.push("year()", christmas_noon.year());
    out.push("get(MonthOfYear)", christmas_noon.get(Field::MonthOfYear)?);
    out.push("month_value()", christmas_noon.month_value());
    out.push("month()", christmas_noon.month());

    // is
    out.push("christmas is_after previous", christmas.is_after(christmas_before));
    out.push("noon is_before 12:10", christmas_noon.is_before(christmas_time));
    out.push("christmas is_equal previous", christmas.is_equal(christmas_before));
    out.push("date supports Hours", christmas.is_unit_supported(Unit::Hours));
    out.push("date supports HourOfDay", christmas.is_field_supported(Field::HourOfDay));

    // with
    let reference = settings.reference_date;
    let next_day = reference.with_day(23).context("with_day(23)")?;
    let april = reference
        .with_field(Field::MonthOfYear, i64::from(Month::April.number()))
        .context("with(MonthOfYear, APRIL)")?;
    out.push("reference date", reference);
    out.push("with_day(23)", next_day);
    out.push("with(MonthOfYear, APRIL)", april);

    // Splitting and joining
    let date_now = now.to_date();
    let time_now = now.to_time();
    out.push("now to_date", date_now);
    out.push("now to_time", time_now);
    out.push("date at_time", date_now.at_time(time_now));

    // Duration
    let since_epoch = seconds_between(Instant::EPOCH, Instant::now(clock));
    let lunch = seconds_between(christmas_noon, christmas_time);
    out.push("seconds since epoch", since_epoch.seconds());
    out.push("seconds noon to 12:10", lunch.seconds());
    match lunch.get(Unit::Minutes) {
        Ok(minutes) => out.push("duration in minutes", minutes),
        Err(e) => out.push("duration in minutes", format!("error: {e}")),
    }

    // Period
    let age = period_between(settings.birthday, today);
    out.push("age in years", age.get(Unit::Years)?);
    out.push("age in months", age.get(Unit::Months)?);
    out.push("age in days", age.get(Unit::Days)?);

    // Patterns
    let pattern = &settings.pattern;
    let birthday_text = settings.birthday.format(pattern)?;
    out.push(format!("birthday as \"{pattern}\""), &birthday_text);
    out.push("pattern.format(birthday)", pattern.format(&settings.birthday)?);
    let parsed = CalendarDate::parse(&birthday_text, pattern)
        .with_context(|| format!("parsing {birthday_text:?}"))?;
    out.push(format!("parsed {birthday_text:?}"), parsed);

    Ok(out.lines)
}

/// Prints the walkthrough to stdout.
pub fn run(config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("tour").entered();
    let clock = convert::build_clock(&config.clock)?;
    let settings = convert::build_tour_settings(&config.tour, &config.clock)?;
    info!(zones = settings.zones.len(), birthday = %settings.birthday, "starting tour");

    let lines = lines(clock.as_ref(), &settings)?;
    for line in &lines {
        println!("{line}");
    }
    info!(n_lines = lines.len(), "tour finished");
    Ok(())
}
