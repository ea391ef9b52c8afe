//! Wall-clock access.
//!
//! Every timestamp in a record is an independent read of a [`Clock`], so
//! alert times and the emission time may differ by a second across a
//! boundary. Tests substitute a fixed clock.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::types::time_format::truncate_to_seconds;

pub trait Clock: Send {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local time of day, whole seconds.
    fn time_of_day(&self) -> NaiveTime {
        truncate_to_seconds(self.now().time())
    }

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall clock, no timezone handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
