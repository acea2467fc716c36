//! Timer scheduler adapter
//!
//! Each timer is a task on the Dioxus runtime that sleeps through the
//! platform [`SleepProvider`](crate::ports::outbound::SleepProvider) and
//! then posts `ExperienceEvent::Timer`. Cancellation bumps an epoch; tasks
//! issued under an older epoch stop without firing.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::infrastructure::{spawn_task, EventDispatcher};
use crate::ports::outbound::{ExperienceEvent, SchedulerPort, TimerId};
use crate::state::Platform;

#[derive(Clone, Default)]
struct CancelEpoch(Rc<Cell<u64>>);

impl CancelEpoch {
    fn token(&self) -> CancelToken {
        CancelToken {
            epoch: self.clone(),
            issued: self.0.get(),
        }
    }

    fn advance(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

struct CancelToken {
    epoch: CancelEpoch,
    issued: u64,
}

impl CancelToken {
    fn is_cancelled(&self) -> bool {
        self.epoch.0.get() != self.issued
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

pub struct TaskScheduler {
    dispatcher: EventDispatcher,
    platform: Platform,
    epoch: CancelEpoch,
}

impl TaskScheduler {
    pub fn new(dispatcher: EventDispatcher, platform: Platform) -> Self {
        Self {
            dispatcher,
            platform,
            epoch: CancelEpoch::default(),
        }
    }

    fn once_task(&self, timer: TimerId, after: Duration) -> impl Future<Output = ()> + 'static {
        let token = self.epoch.token();
        let sleep = self.platform.sleep_ms(millis(after));
        let dispatcher = self.dispatcher.clone();
        async move {
            sleep.await;
            if token.is_cancelled() {
                tracing::trace!("Timer {:?} cancelled", timer);
                return;
            }
            dispatcher.send(ExperienceEvent::Timer(timer));
        }
    }

    fn repeating_task(
        &self,
        timer: TimerId,
        every: Duration,
    ) -> impl Future<Output = ()> + 'static {
        let token = self.epoch.token();
        let platform = self.platform.clone();
        let dispatcher = self.dispatcher.clone();
        let period = millis(every);
        async move {
            loop {
                platform.sleep_ms(period).await;
                if token.is_cancelled() || dispatcher.is_closed() {
                    tracing::trace!("Repeating timer {:?} stopped", timer);
                    break;
                }
                dispatcher.send(ExperienceEvent::Timer(timer));
            }
        }
    }
}

impl SchedulerPort for TaskScheduler {
    fn schedule_once(&self, timer: TimerId, after: Duration) {
        spawn_task(self.once_task(timer, after));
    }

    fn schedule_repeating(&self, timer: TimerId, every: Duration) {
        spawn_task(self.repeating_task(timer, every));
    }

    fn cancel_all(&self) {
        self.epoch.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::event_channel;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use chrono::Utc;
    use futures_util::{FutureExt, StreamExt};

    fn scheduler() -> (TaskScheduler, futures_channel::mpsc::UnboundedReceiver<ExperienceEvent>) {
        let (dispatcher, rx) = event_channel();
        (
            TaskScheduler::new(dispatcher, create_mock_platform(Utc::now())),
            rx,
        )
    }

    #[test]
    fn once_fires_after_sleep() {
        let (scheduler, mut rx) = scheduler();
        let task = scheduler.once_task(TimerId::UnlockDelay, Duration::from_millis(800));
        assert!(task.now_or_never().is_some());
        assert_eq!(
            rx.next().now_or_never().flatten(),
            Some(ExperienceEvent::Timer(TimerId::UnlockDelay))
        );
    }

    #[test]
    fn cancel_all_suppresses_pending_timers() {
        let (scheduler, mut rx) = scheduler();
        let task = scheduler.once_task(TimerId::VideoFallback, Duration::from_secs(10));
        scheduler.cancel_all();
        assert!(task.now_or_never().is_some());
        assert!(rx.next().now_or_never().is_none());
    }

    #[test]
    fn timers_scheduled_after_cancel_still_fire() {
        let (scheduler, mut rx) = scheduler();
        scheduler.cancel_all();
        let task = scheduler.once_task(TimerId::AudioResume, Duration::from_millis(100));
        assert!(task.now_or_never().is_some());
        assert_eq!(
            rx.next().now_or_never().flatten(),
            Some(ExperienceEvent::Timer(TimerId::AudioResume))
        );
    }

    #[test]
    fn repeating_stops_when_cancelled() {
        let (scheduler, mut rx) = scheduler();
        let task = scheduler.repeating_task(TimerId::ParticleBurst, Duration::from_secs(8));
        scheduler.cancel_all();
        assert!(task.now_or_never().is_some());
        assert!(rx.next().now_or_never().is_none());
    }

    #[test]
    fn repeating_stops_when_queue_closes() {
        let (scheduler, rx) = scheduler();
        drop(rx);
        let task = scheduler.repeating_task(TimerId::AutoLoop, Duration::from_secs(4));
        assert!(task.now_or_never().is_some());
    }

    #[test]
    fn oversized_durations_saturate() {
        assert_eq!(millis(Duration::from_millis(200)), 200);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
