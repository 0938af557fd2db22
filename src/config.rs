use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Clock and zone settings.
    #[serde(default)]
    pub clock: ClockToml,

    /// Default patterns.
    #[serde(default)]
    pub format: FormatToml,

    /// Inputs for the guided tour.
    #[serde(default)]
    pub tour: TourToml,
}

/// `[clock]`: which instant counts as "now" and where it is read.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    /// Zone identifier for local readings; the process local zone if unset.
    #[serde(default)]
    pub zone: Option<String>,

    /// Epoch second to freeze the clock at; the system clock if unset.
    #[serde(default)]
    pub fixed_instant: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    #[serde(default = "default_date_pattern")]
    pub date_pattern: String,
    #[serde(default = "default_timestamp_pattern")]
    pub timestamp_pattern: String,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            date_pattern: default_date_pattern(),
            timestamp_pattern: default_timestamp_pattern(),
        }
    }
}

fn default_date_pattern() -> String {
    "yyyy-MM-dd".to_string()
}
fn default_timestamp_pattern() -> String {
    "yyyy-MM-dd'T'HH:mm:ss".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TourToml {
    /// Zones whose local "now" the tour prints.
    #[serde(default = "default_tour_zones")]
    pub zones: Vec<String>,
    /// ISO date the age period is measured from.
    #[serde(default = "default_birthday")]
    pub birthday: String,
    /// ISO date the `with` examples start from.
    #[serde(default = "default_reference_date")]
    pub reference_date: String,
    /// Pattern used by the format and parse steps.
    #[serde(default = "default_tour_pattern")]
    pub pattern: String,
}

impl Default for TourToml {
    fn default() -> Self {
        Self {
            zones: default_tour_zones(),
            birthday: default_birthday(),
            reference_date: default_reference_date(),
            pattern: default_tour_pattern(),
        }
    }
}

fn default_tour_zones() -> Vec<String> {
    vec!["Asia/Tokyo".to_string(), "Europe/Paris".to_string()]
}
fn default_birthday() -> String {
    "1984-08-18".to_string()
}
fn default_reference_date() -> String {
    "2024-05-22".to_string()
}
fn default_tour_pattern() -> String {
    "dd MM yyyy".to_string()
}

/// Loads the configuration at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<AlmanacConfig> {
    let Some(path) = path else {
        return Ok(AlmanacConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
