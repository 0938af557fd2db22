use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Almanac date and time explorer.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Explore immutable dates, times, intervals and patterns"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Replay the guided walkthrough of the library.
    Tour,
    /// Print the current date, time and timestamp.
    Now(NowArgs),
    /// Print the calendar period between two dates.
    Period(PeriodArgs),
    /// Print the elapsed seconds between two timestamps.
    Seconds(SecondsArgs),
    /// Parse text with one pattern and render it with another.
    Reformat(ReformatArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Zone identifier, e.g. `Asia/Tokyo`. Overrides the configured zone.
    #[arg(short, long)]
    pub zone: Option<String>,
}

/// Arguments for the `period` subcommand.
#[derive(clap::Args)]
pub struct PeriodArgs {
    /// Start date (inclusive).
    #[arg(long)]
    pub from: String,

    /// End date (exclusive).
    #[arg(long)]
    pub to: String,

    /// Pattern both dates are written in. Defaults to the configured date pattern.
    #[arg(short, long)]
    pub pattern: Option<String>,
}

/// Arguments for the `seconds` subcommand.
#[derive(clap::Args)]
pub struct SecondsArgs {
    /// Start timestamp.
    #[arg(long)]
    pub from: String,

    /// End timestamp.
    #[arg(long)]
    pub to: String,

    /// Pattern both timestamps are written in. Defaults to the configured
    /// timestamp pattern.
    #[arg(short, long)]
    pub pattern: Option<String>,
}

/// Arguments for the `reformat` subcommand.
#[derive(clap::Args)]
pub struct ReformatArgs {
    /// Text to convert.
    pub text: String,

    /// Pattern `text` is written in.
    #[arg(long = "from-pattern")]
    pub from_pattern: String,

    /// Pattern to render with.
    #[arg(long = "to-pattern")]
    pub to_pattern: String,

    /// Kind of value the text holds.
    #[arg(long = "as", value_enum, default_value_t = ValueKind::Date)]
    pub kind: ValueKind,
}

/// Kind of value handled by `reformat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Date,
    Time,
    Timestamp,
}
