//! Scheduler port - one-shot and repeating timers

use std::time::Duration;

use super::TimerId;

/// Timer service. Firings are delivered as `ExperienceEvent::Timer`.
pub trait SchedulerPort {
    fn schedule_once(&self, timer: TimerId, after: Duration);

    /// Fire `timer` every `every` until [`cancel_all`](Self::cancel_all).
    fn schedule_repeating(&self, timer: TimerId, every: Duration);

    /// Cancel every pending and repeating timer.
    fn cancel_all(&self);
}
