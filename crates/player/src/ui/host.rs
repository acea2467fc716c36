//! Wires the adapters into an [`Experience`] and runs its event loop.

use std::rc::Rc;

use futures_util::StreamExt;
use keepsake_domain::ExperienceConfig;

use crate::application::{Experience, ExperiencePorts};
use crate::infrastructure::media::{EvalAudioPort, EvalVideoPort};
use crate::infrastructure::particles::ConfettiParticles;
use crate::infrastructure::scheduler::TaskScheduler;
use crate::infrastructure::{event_channel, spawn_task, EventDispatcher};
use crate::state::Platform;
use crate::ui::presentation::state::ViewState;

/// Build the experience and start draining its queue.
///
/// The loop ends on `Dispose`, which drops the receiver; timers and media
/// callbacks still in flight then post into a closed channel.
pub(super) fn start_experience(
    config: &ExperienceConfig,
    platform: Platform,
    view: ViewState,
) -> EventDispatcher {
    let (dispatcher, mut events) = event_channel();

    let ports = ExperiencePorts {
        surface: Rc::new(view),
        video: Rc::new(EvalVideoPort::new(dispatcher.clone())),
        audio: Rc::new(EvalAudioPort::new(dispatcher.clone())),
        particles: Some(Rc::new(ConfettiParticles)),
        scheduler: Rc::new(TaskScheduler::new(dispatcher.clone(), platform.clone())),
        clock: Rc::new(platform),
    };

    match Experience::new(config, ports) {
        Ok(mut experience) => {
            spawn_task(async move {
                experience.init();
                while let Some(event) = events.next().await {
                    experience.handle(event);
                    if experience.is_disposed() {
                        break;
                    }
                }
                tracing::debug!("Experience event loop stopped");
            });
        }
        Err(e) => tracing::error!("Experience could not start: {}", e),
    }

    dispatcher
}
