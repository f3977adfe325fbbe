//! Wall-clock access behind a trait.
//!
//! The simulated safety score and crowd level depend on the local hour of
//! day, and alert records carry a timestamp.  Both read time through
//! [`Clock`] so tests can pin it with [`FixedClock`].

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Source of the current local time.
pub trait Clock: Send + Sync {
    /// Current local date-time (no time zone attached).
    fn now(&self) -> NaiveDateTime;

    /// Current local hour of day, `0..=23`.
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// The machine's local clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Frozen at `hour:00` on an arbitrary fixed date.  Hours above 23 wrap.
    pub fn at_hour(hour: u32) -> Self {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(hour % 24, 0, 0))
            .unwrap_or_default();
        FixedClock(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
