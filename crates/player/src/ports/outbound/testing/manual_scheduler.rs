//! Scheduler fake that never fires on its own
//!
//! Tests inspect what was scheduled and deliver `ExperienceEvent::Timer`
//! themselves, which makes timer ordering fully deterministic.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::ports::outbound::{SchedulerPort, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub timer: TimerId,
    pub delay: Duration,
    pub repeating: bool,
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    scheduled: RefCell<Vec<ScheduledTimer>>,
    cancellations: Cell<u32>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything currently scheduled, in scheduling order.
    pub fn pending(&self) -> Vec<ScheduledTimer> {
        self.scheduled.borrow().clone()
    }

    pub fn is_scheduled(&self, timer: TimerId) -> bool {
        self.scheduled.borrow().iter().any(|s| s.timer == timer)
    }

    /// Delay of the first pending entry for `timer`.
    pub fn delay_of(&self, timer: TimerId) -> Option<Duration> {
        self.scheduled
            .borrow()
            .iter()
            .find(|s| s.timer == timer)
            .map(|s| s.delay)
    }

    /// Remove one pending one-shot `timer`, as if it had fired.
    ///
    /// Returns `true` for repeating timers without removing them.
    pub fn take(&self, timer: TimerId) -> bool {
        let mut scheduled = self.scheduled.borrow_mut();
        match scheduled.iter().position(|s| s.timer == timer) {
            Some(i) if scheduled[i].repeating => true,
            Some(i) => {
                scheduled.remove(i);
                true
            }
            None => false,
        }
    }

    /// Latest shake reset generation, if one is pending.
    pub fn pending_shake_reset(&self) -> Option<u32> {
        self.scheduled.borrow().iter().rev().find_map(|s| match s.timer {
            TimerId::ShakeReset(generation) => Some(generation),
            _ => None,
        })
    }

    pub fn cancellations(&self) -> u32 {
        self.cancellations.get()
    }

    fn push(&self, timer: TimerId, delay: Duration, repeating: bool) {
        self.scheduled.borrow_mut().push(ScheduledTimer {
            timer,
            delay,
            repeating,
        });
    }
}

impl SchedulerPort for ManualScheduler {
    fn schedule_once(&self, timer: TimerId, after: Duration) {
        self.push(timer, after, false);
    }

    fn schedule_repeating(&self, timer: TimerId, every: Duration) {
        self.push(timer, every, true);
    }

    fn cancel_all(&self) {
        self.scheduled.borrow_mut().clear();
        self.cancellations.set(self.cancellations.get() + 1);
    }
}
