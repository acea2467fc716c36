//! Media ports - intro video and background audio elements
//!
//! Commands are fire-and-forget. Their outcomes (play accepted, ended,
//! failed) come back later as [`VideoSignal`](super::VideoSignal) and
//! [`AudioSignal`](super::AudioSignal) events.

use keepsake_domain::Track;

/// Errors reported by media adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("playback refused: {0}")]
    PlayRefused(String),

    #[error("media element failed: {0}")]
    Element(String),

    #[error("script bridge failed: {0}")]
    Bridge(String),
}

impl MediaError {
    pub fn play_refused(message: impl Into<String>) -> Self {
        Self::PlayRefused(message.into())
    }

    pub fn element(message: impl Into<String>) -> Self {
        Self::Element(message.into())
    }

    pub fn bridge(message: impl Into<String>) -> Self {
        Self::Bridge(message.into())
    }
}

/// Intro video surface
#[cfg_attr(test, mockall::automock)]
pub trait VideoPort {
    /// Start playback from the beginning.
    fn play(&self);

    /// Stop playback; used when the slideshow takes over.
    fn stop(&self);
}

/// Background music element
pub trait AudioPort {
    /// Replace the element's sources with `track` and reload.
    fn load(&self, track: &Track);

    /// Request playback. Success or refusal arrives as an audio signal.
    fn play(&self);

    fn pause(&self);
}
