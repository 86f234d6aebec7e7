//! Wall-clock abstraction.
//!
//! The current-year helper reads process-wide wall-clock state, so the
//! clock is injectable: production code uses [`SystemClock`], tests
//! substitute [`FixedClock`] instead of patching global time.

use chrono::{DateTime, Datelike, Utc};

/// Source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the instant it was constructed with.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Calendar year of the current instant, read from the system clock.
pub fn current_year() -> i32 {
    current_year_with(&SystemClock)
}

/// Calendar year of "now" as reported by `clock`.
pub fn current_year_with(clock: &impl Clock) -> i32 {
    clock.now().year()
}
