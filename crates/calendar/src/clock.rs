//! Injectable sources of the current instant.

use crate::instant::Instant;

/// A source of "now".
///
/// Every `now`/`today` constructor takes a clock explicitly, so callers
/// control the only time-varying input of the crate.
pub trait Clock {
    /// Returns the current instant.
    fn instant(&self) -> Instant;
}

/// Reads the operating system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn instant(&self) -> Instant {
        let now = chrono::Utc::now();
        let seconds = now.timestamp();
        // Leap-second readings report nanos >= 1e9; the adjustment folds them in.
        let nanos = i64::from(now.timestamp_subsec_nanos());
        Instant::from_epoch_second(seconds, nanos).unwrap_or(if seconds < 0 {
            Instant::MIN
        } else {
            Instant::MAX
        })
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: Instant,
}

impl FixedClock {
    /// Creates a clock stuck at `instant`.
    pub fn new(instant: Instant) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> Instant {
        self.instant
    }
}
