//! # almanac-calendar
//!
//! Immutable date and time values on the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     K["Clock"] -->|".instant()"| I["Instant (UTC)"]
//!     I -->|"Zone::offset_at()"| O["offset seconds"]
//!     I -->|"Timestamp::from_instant()"| T["Timestamp"]
//!     T -->|".to_date()"| D["CalendarDate"]
//!     T -->|".to_time()"| C["ClockTime"]
//!     D -->|".at_time()"| T
//!     D -->|"period_between()"| P["Period"]
//!     T -->|"seconds_between()"| U["Duration"]
//!     S["Pattern"] -->|"format() / parse()"| T
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{
//!     CalendarDate, FixedClock, Instant, Pattern, Timestamp, Zone, period_between,
//!     seconds_between,
//! };
//!
//! // Construction and derived fields
//! let christmas = CalendarDate::of(2024, 12, 25).unwrap();
//! assert_eq!(christmas.day_of_year(), 360);
//!
//! // "Now" through an injected clock
//! let clock = FixedClock::new(Instant::from_epoch_second(1_716_402_552, 0).unwrap());
//! let tokyo = Zone::of("Asia/Tokyo").unwrap();
//! let now = Timestamp::now(&clock, Some(&tokyo));
//!
//! // Intervals
//! let birthday = CalendarDate::of(1984, 8, 18).unwrap();
//! let age = period_between(birthday, now.to_date()); // P39Y9M4D
//! let noon = christmas.at_time(almanac_calendar::ClockTime::NOON);
//! let d = seconds_between(noon, noon.plus_seconds(600).unwrap()); // PT10M
//!
//! // Patterns
//! let pattern = Pattern::compile("dd MM yyyy").unwrap();
//! let parsed = CalendarDate::parse("18 08 1984", &pattern).unwrap();
//! assert_eq!(parsed.format(&pattern).unwrap(), "18 08 1984");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `civil` | Leap-year rules and epoch-day arithmetic |
//! | `month` | Month-of-year enum |
//! | `field` | Field and unit identifiers |
//! | `date` | Calendar date without time or zone |
//! | `time` | Time of day without date or zone |
//! | `timestamp` | Date plus time of day, zone-free |
//! | `partial` | Year-month and month-day values |
//! | `instant` | Point on the UTC time line |
//! | `clock` | Injectable source of the current instant |
//! | `zone` | Zone identifiers and UTC offsets |
//! | `interval` | Durations and periods between values |
//! | `pattern` | Pattern-driven formatting and parsing |
//! | `error` | Error types |

mod civil;
mod clock;
mod date;
mod error;
mod field;
mod instant;
mod interval;
mod month;
mod partial;
mod pattern;
mod time;
mod timestamp;
mod zone;

pub use civil::{MAX_YEAR, MIN_YEAR, days_in_month, days_in_year, is_leap_year};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::CalendarDate;
pub use error::CalendarError;
pub use field::{Field, Unit};
pub use instant::Instant;
pub use interval::{Duration, Period, TimeLine, period_between, seconds_between};
pub use month::Month;
pub use partial::{MonthDay, YearMonth};
pub use pattern::{ParsedFields, Pattern, Temporal, format, parse};
pub use time::ClockTime;
pub use timestamp::Timestamp;
pub use zone::Zone;
