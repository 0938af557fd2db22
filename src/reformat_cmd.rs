//! Reformat command: parse text with one pattern and render it with another.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use almanac_calendar::{CalendarDate, ClockTime, Pattern, Temporal, Timestamp};

use crate::cli::{ReformatArgs, ValueKind};
use crate::convert;

/// Converts `text` from `from` to `to`, reading it as a value of `kind`.
pub fn reformat(text: &str, from: &str, to: &str, kind: ValueKind) -> Result<String> {
    let from = convert::parse_pattern(from)?;
    let to = convert::parse_pattern(to)?;
    match kind {
        ValueKind::Date => convert_as::<CalendarDate>(text, &from, &to),
        ValueKind::Time => convert_as::<ClockTime>(text, &from, &to),
        ValueKind::Timestamp => convert_as::<Timestamp>(text, &from, &to),
    }
}

fn convert_as<T: Temporal>(text: &str, from: &Pattern, to: &Pattern) -> Result<String> {
    let value: T = from
        .parse(text)
        .with_context(|| format!("{text:?} does not match \"{from}\" as {}", T::KIND))?;
    to.format(&value)
        .with_context(|| format!("cannot render {} with \"{to}\"", T::KIND))
}

pub fn run(args: ReformatArgs) -> Result<()> {
    let _cmd = info_span!("reformat").entered();
    let out = reformat(&args.text, &args.from_pattern, &args.to_pattern, args.kind)?;
    info!(kind = ?args.kind, "reformatted");
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_to_iso() {
        let out = reformat("18 08 1984", "dd MM yyyy", "yyyy-MM-dd", ValueKind::Date).unwrap();
        assert_eq!(out, "1984-08-18");
    }

    #[test]
    fn timestamp_to_time_of_day() {
        let out = reformat(
            "2024-12-25 12:10",
            "yyyy-MM-dd HH:mm",
            "HH'h'mm",
            ValueKind::Timestamp,
        )
        .unwrap();
        assert_eq!(out, "12h10");
    }

    #[test]
    fn time_cannot_render_date_fields() {
        let err = reformat("12:10", "HH:mm", "dd/MM", ValueKind::Time).unwrap_err();
        assert!(format!("{err:#}").contains("cannot render ClockTime"));
    }

    #[test]
    fn mismatch_mentions_kind() {
        let err = reformat("18-08-1984", "dd MM yyyy", "yyyy", ValueKind::Date).unwrap_err();
        assert!(format!("{err:#}").contains("as CalendarDate"));
    }
}
