//! Ambient Service - day counter and particle bursts

use std::rc::Rc;

use keepsake_domain::ambient::{COUNTDOWN_REFRESH, PARTICLE_INTERVAL};
use keepsake_domain::{AppState, BurstSpec, CountdownTemplate};

use crate::ports::outbound::{ClockPort, ParticlePort, SchedulerPort, SurfacePort, TimerId};

pub struct AmbientService {
    template: CountdownTemplate,
    particles: Option<Rc<dyn ParticlePort>>,
    surface: Rc<dyn SurfacePort>,
    scheduler: Rc<dyn SchedulerPort>,
    clock: Rc<dyn ClockPort>,
}

impl AmbientService {
    pub fn new(
        template: CountdownTemplate,
        particles: Option<Rc<dyn ParticlePort>>,
        surface: Rc<dyn SurfacePort>,
        scheduler: Rc<dyn SchedulerPort>,
        clock: Rc<dyn ClockPort>,
    ) -> Self {
        Self {
            template,
            particles,
            surface,
            scheduler,
            clock,
        }
    }

    /// Opening burst plus the recurring one. No-op without a renderer.
    pub fn start_particles(&self) {
        let Some(particles) = &self.particles else {
            tracing::debug!("No particle renderer, skipping bursts");
            return;
        };
        particles.burst(&BurstSpec::opening());
        self.scheduler
            .schedule_repeating(TimerId::ParticleBurst, PARTICLE_INTERVAL);
    }

    pub fn on_particle_tick(&self) {
        if let Some(particles) = &self.particles {
            particles.burst(&BurstSpec::recurring());
        }
    }

    /// Record the session start, render the counter and refresh it daily.
    pub fn start_countdown(&self, state: &mut AppState) {
        let start = state.begin_session(self.clock.now());
        tracing::debug!(%start, "Session started");
        self.update_countdown(state);
        self.scheduler
            .schedule_repeating(TimerId::CountdownRefresh, COUNTDOWN_REFRESH);
    }

    pub fn update_countdown(&self, state: &AppState) {
        let Some(start) = state.session_start() else {
            return;
        };
        let text = self.template.render_since(start, self.clock.now());
        self.surface.set_countdown(&text);
    }
}
