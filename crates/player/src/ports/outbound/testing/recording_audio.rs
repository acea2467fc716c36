//! Audio element fake that records commands

use std::cell::RefCell;

use keepsake_domain::Track;

use crate::ports::outbound::AudioPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    /// Primary source of the loaded track
    Load(String),
    Play,
    Pause,
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    calls: RefCell<Vec<AudioCall>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, call: &AudioCall) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn last_loaded(&self) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            AudioCall::Load(source) => Some(source.clone()),
            _ => None,
        })
    }
}

impl AudioPort for RecordingAudio {
    fn load(&self, track: &Track) {
        self.calls
            .borrow_mut()
            .push(AudioCall::Load(track.primary_source().to_string()));
    }

    fn play(&self) {
        self.calls.borrow_mut().push(AudioCall::Play);
    }

    fn pause(&self) {
        self.calls.borrow_mut().push(AudioCall::Pause);
    }
}
