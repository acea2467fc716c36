//! Clock port - time source for the day counter

use chrono::{DateTime, Utc};

/// Source of "now" for the experience.
///
/// Only the ambient day counter reads the clock; everything else is driven
/// by scheduled timers.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort {
    fn now(&self) -> DateTime<Utc>;
}
