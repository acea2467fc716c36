//! Audio Playlist Service - background music with wrap-around navigation
//!
//! Play requests are asynchronous: the playing flag is raised optimistically
//! and dropped again if the element reports the request was refused.

use std::rc::Rc;

use keepsake_domain::playlist::RESUME_GRACE;
use keepsake_domain::{AppState, AudioPlaylist, TrackSwitch};

use crate::ports::outbound::{AudioPort, AudioSignal, SchedulerPort, SurfacePort, TimerId};

pub struct AudioPlaylistService {
    playlist: AudioPlaylist,
    audio: Rc<dyn AudioPort>,
    surface: Rc<dyn SurfacePort>,
    scheduler: Rc<dyn SchedulerPort>,
}

impl AudioPlaylistService {
    pub fn new(
        playlist: AudioPlaylist,
        audio: Rc<dyn AudioPort>,
        surface: Rc<dyn SurfacePort>,
        scheduler: Rc<dyn SchedulerPort>,
    ) -> Self {
        Self {
            playlist,
            audio,
            surface,
            scheduler,
        }
    }

    pub fn render(&self, state: &AppState) {
        self.surface.set_track_info(&self.playlist.track_info(state));
        self.surface.set_play_state(self.playlist.play_state());
    }

    pub fn is_playing(&self) -> bool {
        self.playlist.is_playing()
    }

    /// Load `index` without changing the playing flag. Out of range is ignored.
    pub fn load(&self, state: &mut AppState, index: usize) {
        match self.playlist.load(state, index) {
            Some(track) => {
                tracing::debug!(index, name = %track.display_name(), "Loading track");
                self.audio.load(track);
                self.surface.set_track_info(&self.playlist.track_info(state));
            }
            None => {
                tracing::debug!(index, "Track index out of range, ignoring");
            }
        }
    }

    /// First track, then an attempt to play it.
    pub fn start_playback(&mut self, state: &mut AppState) {
        self.load(state, 0);
        self.request_play();
    }

    pub fn toggle_play_pause(&mut self) {
        if self.playlist.is_playing() {
            self.audio.pause();
            self.set_playing(false);
        } else {
            self.request_play();
        }
    }

    pub fn next(&self, state: &mut AppState) {
        let switch = self.playlist.next(state);
        self.apply_switch(state, switch);
    }

    pub fn prev(&self, state: &mut AppState) {
        let switch = self.playlist.prev(state);
        self.apply_switch(state, switch);
    }

    /// Grace period after a switch elapsed.
    pub fn on_resume(&self) {
        self.audio.play();
    }

    pub fn on_signal(&mut self, state: &mut AppState, signal: AudioSignal) {
        match signal {
            AudioSignal::LoadStart => {
                self.surface.set_track_info(&self.playlist.loading_info(state));
            }
            AudioSignal::CanPlay => {
                self.surface.set_track_info(&self.playlist.track_info(state));
            }
            AudioSignal::Ended => {
                let switch = self.playlist.advance_after_end(state);
                self.apply_switch(state, switch);
            }
            AudioSignal::Error(e) => {
                tracing::warn!(error = %e, track = state.current_track(), "Audio track failed, skipping");
                self.next(state);
            }
            AudioSignal::PlayStarted => {
                self.set_playing(true);
            }
            AudioSignal::PlayRejected(e) => {
                tracing::info!(error = %e, "Audio autoplay prevented");
                self.set_playing(false);
            }
            AudioSignal::Paused => {
                if self.playlist.is_playing() {
                    tracing::debug!("Audio paused externally");
                }
                self.set_playing(false);
            }
        }
    }

    /// Stop playback for teardown.
    pub fn pause(&mut self) {
        self.audio.pause();
        self.playlist.set_playing(false);
    }

    fn request_play(&mut self) {
        self.audio.play();
        self.set_playing(true);
    }

    fn apply_switch(&self, state: &mut AppState, switch: TrackSwitch) {
        self.load(state, switch.index);
        if switch.resume {
            self.scheduler.schedule_once(TimerId::AudioResume, RESUME_GRACE);
        }
    }

    fn set_playing(&mut self, playing: bool) {
        self.playlist.set_playing(playing);
        self.surface.set_play_state(self.playlist.play_state());
    }
}
