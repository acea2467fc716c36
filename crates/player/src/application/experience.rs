//! Experience orchestrator
//!
//! Owns the [`AppState`] and the services, and handles one
//! [`ExperienceEvent`] at a time. Each event runs to completion before the
//! next is taken, so there is never more than one writer.

use std::rc::Rc;

use keepsake_domain::{
    route_key, route_swipe, AppState, AudioCommand, AudioPlaylist, Command, DomainError,
    ExperienceConfig, PinCommand, PinGate, SlideCommand, SlideRotator, TransitionPhase,
    TransitionTrigger, VerifyOutcome,
};

use crate::application::services::{
    AmbientService, AudioPlaylistService, PinGateService, ScreenTransitionService,
    SlideRotatorService,
};
use crate::ports::outbound::{
    AudioPort, ClockPort, ExperienceEvent, ParticlePort, SchedulerPort, SurfacePort, TimerId,
    VideoPort, VideoSignal,
};

/// Everything the experience drives.
pub struct ExperiencePorts {
    pub surface: Rc<dyn SurfacePort>,
    pub video: Rc<dyn VideoPort>,
    pub audio: Rc<dyn AudioPort>,
    /// `None` disables particle bursts
    pub particles: Option<Rc<dyn ParticlePort>>,
    pub scheduler: Rc<dyn SchedulerPort>,
    pub clock: Rc<dyn ClockPort>,
}

pub struct Experience {
    state: AppState,
    pin_gate: PinGateService,
    transition: ScreenTransitionService,
    audio: AudioPlaylistService,
    slides: SlideRotatorService,
    ambient: AmbientService,
    scheduler: Rc<dyn SchedulerPort>,
    disposed: bool,
}

impl Experience {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the config has no tracks or
    /// no slides.
    pub fn new(config: &ExperienceConfig, ports: ExperiencePorts) -> Result<Self, DomainError> {
        config.validate()?;

        let ExperiencePorts {
            surface,
            video,
            audio,
            particles,
            scheduler,
            clock,
        } = ports;

        let playlist = AudioPlaylist::new(config.tracks.clone())?;
        let rotator = SlideRotator::new(config.slides.len())?;

        Ok(Self {
            state: AppState::new(),
            pin_gate: PinGateService::new(
                PinGate::new(config.secret.clone()),
                surface.clone(),
                scheduler.clone(),
            ),
            transition: ScreenTransitionService::new(surface.clone(), video, scheduler.clone()),
            audio: AudioPlaylistService::new(playlist, audio, surface.clone(), scheduler.clone()),
            slides: SlideRotatorService::new(rotator, surface.clone(), scheduler.clone()),
            ambient: AmbientService::new(
                config.countdown_template.clone(),
                particles,
                surface,
                scheduler.clone(),
                clock,
            ),
            scheduler,
            disposed: false,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Render the initial lock screen and control labels.
    pub fn init(&mut self) {
        self.transition.render();
        self.pin_gate.render(&self.state);
        self.audio.render(&self.state);
        self.slides.render(&self.state);
        tracing::info!("Experience initialized");
    }

    pub fn handle(&mut self, event: ExperienceEvent) {
        if self.disposed {
            tracing::debug!(?event, "Experience disposed, dropping event");
            return;
        }

        let phase = self.phase();
        match event {
            ExperienceEvent::Key(key) => match route_key(phase, key) {
                Some(command) => self.run(command),
                None => tracing::debug!(?key, ?phase, "Key ignored"),
            },
            ExperienceEvent::Command(command) => {
                if command.applies_to(phase) {
                    self.run(command);
                } else {
                    tracing::debug!(?command, ?phase, "Command ignored");
                }
            }
            ExperienceEvent::Swipe { start_x, end_x } => {
                if let Some(command) = route_swipe(phase, start_x, end_x) {
                    self.run(command);
                }
            }
            ExperienceEvent::Timer(timer) => self.on_timer(timer),
            ExperienceEvent::Video(signal) => self.on_video(signal),
            ExperienceEvent::Audio(signal) => self.audio.on_signal(&mut self.state, signal),
            ExperienceEvent::Dispose => self.dispose(),
        }
    }

    /// Cancel every timer and silence the music. Later events are dropped.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.cancel_all();
        self.audio.pause();
        self.disposed = true;
        tracing::info!("Experience disposed");
    }

    fn run(&mut self, command: Command) {
        let state = &mut self.state;
        match command {
            Command::Pin(PinCommand::Digit(digit)) => self.pin_gate.submit_digit(state, digit),
            Command::Pin(PinCommand::Backspace) => self.pin_gate.backspace(state),
            Command::Pin(PinCommand::Confirm) => {
                let outcome = self.pin_gate.verify(state);
                self.after_verify(outcome);
            }
            Command::Slides(SlideCommand::Next) => self.slides.next(state),
            Command::Slides(SlideCommand::Prev) => self.slides.prev(state),
            Command::Slides(SlideCommand::ToggleAutoLoop) => self.slides.toggle_auto_loop(state),
            Command::Audio(AudioCommand::TogglePlayPause) => self.audio.toggle_play_pause(),
            Command::Audio(AudioCommand::Next) => self.audio.next(state),
            Command::Audio(AudioCommand::Prev) => self.audio.prev(state),
        }
    }

    fn on_timer(&mut self, timer: TimerId) {
        let state = &mut self.state;
        match timer {
            TimerId::AutoVerify => {
                if !self.transition.phase().accepts_pin_input() {
                    tracing::debug!("Auto-verify after unlock, ignoring");
                    return;
                }
                if let Some(outcome) = self.pin_gate.on_auto_verify(state) {
                    self.after_verify(outcome);
                }
            }
            TimerId::ShakeReset(generation) => self.pin_gate.on_shake_reset(generation),
            TimerId::UnlockDelay => self.transition.on_unlock_delay(state),
            TimerId::VideoFallback => {
                tracing::info!("Intro video timed out");
                self.exit_video(TransitionTrigger::FallbackTimeout);
            }
            TimerId::AudioResume => self.audio.on_resume(),
            TimerId::AutoLoop => self.slides.on_tick(state),
            TimerId::CountdownRefresh => self.ambient.update_countdown(state),
            TimerId::ParticleBurst => self.ambient.on_particle_tick(),
        }
    }

    fn on_video(&mut self, signal: VideoSignal) {
        match signal {
            VideoSignal::Started => tracing::debug!("Intro video started"),
            VideoSignal::Ended => self.exit_video(TransitionTrigger::VideoEnded),
            VideoSignal::Failed(e) => {
                tracing::info!(error = %e, "Intro video unavailable, skipping");
                self.exit_video(TransitionTrigger::VideoFailed);
            }
        }
    }

    fn after_verify(&mut self, outcome: VerifyOutcome) {
        if outcome == VerifyOutcome::Unlocked {
            self.transition.on_pin_accepted(&mut self.state);
        }
    }

    fn exit_video(&mut self, trigger: TransitionTrigger) {
        if self.transition.exit_video(&mut self.state, trigger) {
            self.enter_slideshow();
        }
    }

    fn enter_slideshow(&mut self) {
        self.ambient.start_particles();
        self.ambient.start_countdown(&mut self.state);
        self.audio.start_playback(&mut self.state);
        self.slides.start(&mut self.state);
        tracing::info!("Slideshow started");
    }
}
