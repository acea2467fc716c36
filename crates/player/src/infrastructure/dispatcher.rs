//! Event queue feeding the experience
//!
//! Every adapter and UI handler gets a clone of the [`EventDispatcher`].
//! A single task drains the receiving end, so events are handled strictly
//! one after another in arrival order.

use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::ports::outbound::ExperienceEvent;

#[derive(Clone)]
pub struct EventDispatcher {
    tx: UnboundedSender<ExperienceEvent>,
}

/// Create the queue. The receiver belongs to the experience task.
pub fn event_channel() -> (EventDispatcher, UnboundedReceiver<ExperienceEvent>) {
    let (tx, rx) = mpsc::unbounded();
    (EventDispatcher { tx }, rx)
}

impl EventDispatcher {
    pub fn send(&self, event: ExperienceEvent) {
        if let Err(e) = self.tx.unbounded_send(event) {
            tracing::debug!("Experience queue closed, dropping {:?}", e.into_inner());
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl PartialEq for EventDispatcher {
    fn eq(&self, other: &Self) -> bool {
        self.tx.same_receiver(&other.tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::TimerId;
    use futures_util::{FutureExt, StreamExt};

    #[test]
    fn events_arrive_in_send_order() {
        let (dispatcher, mut rx) = event_channel();
        dispatcher.send(ExperienceEvent::Timer(TimerId::AutoLoop));
        dispatcher.clone().send(ExperienceEvent::Dispose);

        assert_eq!(
            rx.next().now_or_never().flatten(),
            Some(ExperienceEvent::Timer(TimerId::AutoLoop))
        );
        assert_eq!(
            rx.next().now_or_never().flatten(),
            Some(ExperienceEvent::Dispose)
        );
    }

    #[test]
    fn send_after_receiver_dropped_is_harmless() {
        let (dispatcher, rx) = event_channel();
        drop(rx);
        assert!(dispatcher.is_closed());
        dispatcher.send(ExperienceEvent::Dispose);
    }

    #[test]
    fn clones_compare_equal() {
        let (a, _rx) = event_channel();
        let (b, _rx2) = event_channel();
        assert!(a == a.clone());
        assert!(a != b);
    }
}
