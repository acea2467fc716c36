//! Screen Transition Service - lock screen to video to slideshow

use std::rc::Rc;

use keepsake_domain::screen_transition::{UNLOCK_DELAY, VIDEO_FALLBACK_TIMEOUT};
use keepsake_domain::{AppState, ScreenTransition, TransitionPhase, TransitionTrigger};

use crate::ports::outbound::{LockIcon, Region, SchedulerPort, SurfacePort, TimerId, VideoPort};

pub struct ScreenTransitionService {
    machine: ScreenTransition,
    surface: Rc<dyn SurfacePort>,
    video: Rc<dyn VideoPort>,
    scheduler: Rc<dyn SchedulerPort>,
}

impl ScreenTransitionService {
    pub fn new(
        surface: Rc<dyn SurfacePort>,
        video: Rc<dyn VideoPort>,
        scheduler: Rc<dyn SchedulerPort>,
    ) -> Self {
        Self {
            machine: ScreenTransition::new(),
            surface,
            video,
            scheduler,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.machine.phase()
    }

    /// Initial page layout: only the lock screen is visible.
    pub fn render(&self) {
        self.surface.set_visible(Region::LockScreen, true);
        self.surface.set_visible(Region::Loading, false);
        self.surface.set_visible(Region::Video, false);
        self.surface.set_visible(Region::Slideshow, false);
        self.surface.set_lock_icon(LockIcon::Closed);
    }

    /// Correct PIN: open the lock and wait before starting the video.
    pub fn on_pin_accepted(&mut self, state: &mut AppState) {
        if !self.apply(state, TransitionTrigger::PinAccepted) {
            return;
        }
        self.surface.set_lock_icon(LockIcon::Open);
        self.surface.set_visible(Region::Loading, true);
        self.scheduler.schedule_once(TimerId::UnlockDelay, UNLOCK_DELAY);
    }

    pub fn on_unlock_delay(&mut self, state: &mut AppState) {
        if !self.apply(state, TransitionTrigger::UnlockDelayElapsed) {
            return;
        }
        self.surface.set_visible(Region::LockScreen, false);
        self.surface.set_visible(Region::Loading, false);
        self.surface.set_visible(Region::Video, true);
        self.video.play();
        self.scheduler
            .schedule_once(TimerId::VideoFallback, VIDEO_FALLBACK_TIMEOUT);
    }

    /// Leave the video for the slideshow.
    ///
    /// Returns `true` only for the first exit; later ones are no-ops.
    pub fn exit_video(&mut self, state: &mut AppState, trigger: TransitionTrigger) -> bool {
        if !self.apply(state, trigger) {
            return false;
        }
        self.video.stop();
        self.surface.set_visible(Region::Video, false);
        self.surface.set_visible(Region::Slideshow, true);
        true
    }

    fn apply(&mut self, state: &mut AppState, trigger: TransitionTrigger) -> bool {
        match self.machine.apply(state, trigger) {
            Ok(phase) => {
                tracing::info!(?phase, %trigger, "Screen transition");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring transition trigger");
                false
            }
        }
    }
}
