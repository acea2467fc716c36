//! Slide Rotator Service - active slide, progress bar and auto-loop

use std::rc::Rc;

use keepsake_domain::slides::AUTO_LOOP_PERIOD;
use keepsake_domain::{AppState, SlideRotator};

use crate::ports::outbound::{SchedulerPort, SurfacePort, TimerId};

pub struct SlideRotatorService {
    rotator: SlideRotator,
    surface: Rc<dyn SurfacePort>,
    scheduler: Rc<dyn SchedulerPort>,
}

impl SlideRotatorService {
    pub fn new(
        rotator: SlideRotator,
        surface: Rc<dyn SurfacePort>,
        scheduler: Rc<dyn SchedulerPort>,
    ) -> Self {
        Self {
            rotator,
            surface,
            scheduler,
        }
    }

    pub fn render(&self, state: &AppState) {
        self.surface.set_auto_loop(state.auto_loop());
    }

    /// First slide plus the free-running auto-loop tick.
    ///
    /// The tick runs whether or not auto-loop is enabled; toggling only
    /// gates whether a tick advances.
    pub fn start(&self, state: &mut AppState) {
        self.show(state, 0);
        self.scheduler
            .schedule_repeating(TimerId::AutoLoop, AUTO_LOOP_PERIOD);
    }

    pub fn show(&self, state: &mut AppState, index: usize) {
        if index >= self.rotator.count() {
            tracing::debug!(index, "Slide index out of range, ignoring");
            return;
        }
        self.surface.show_slide(self.rotator.show(state, index));
    }

    pub fn next(&self, state: &mut AppState) {
        self.surface.show_slide(self.rotator.next(state));
    }

    pub fn prev(&self, state: &mut AppState) {
        self.surface.show_slide(self.rotator.prev(state));
    }

    pub fn toggle_auto_loop(&self, state: &mut AppState) {
        let enabled = self.rotator.toggle_auto_loop(state);
        tracing::debug!(enabled, "Auto-loop toggled");
        self.surface.set_auto_loop(enabled);
    }

    pub fn on_tick(&self, state: &mut AppState) {
        if let Some(view) = self.rotator.tick(state) {
            self.surface.show_slide(view);
        }
    }
}
