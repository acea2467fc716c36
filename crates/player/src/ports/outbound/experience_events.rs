//! Experience events
//!
//! Everything that reaches the experience arrives as one of these: user
//! input, notifications from media elements, and firings of timers the
//! experience scheduled itself. Adapters translate DOM callbacks into events
//! and push them onto a single queue, so handlers never run concurrently.

use keepsake_domain::{Command, KeyInput};

use super::media_port::MediaError;

/// Identifies a scheduled timer when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Delay between the final digit and automatic verification
    AutoVerify,
    /// End of a shake animation; carries the generation that started it
    ShakeReset(u32),
    /// Lock icon has been shown open long enough
    UnlockDelay,
    /// Intro video never reported completion
    VideoFallback,
    /// Grace period after switching tracks elapsed
    AudioResume,
    /// Free-running slide auto-loop tick
    AutoLoop,
    /// Daily recomputation of the day counter
    CountdownRefresh,
    /// Recurring particle burst
    ParticleBurst,
}

/// Notifications from the intro video element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSignal {
    Started,
    Ended,
    Failed(MediaError),
}

/// Notifications from the background audio element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSignal {
    /// A new source began loading
    LoadStart,
    /// Enough data buffered to start playing
    CanPlay,
    /// Current track reached its end
    Ended,
    /// Current source failed to load or decode
    Error(MediaError),
    /// A play request succeeded
    PlayStarted,
    /// A play request was refused, typically by autoplay policy
    PlayRejected(MediaError),
    /// Playback paused outside of our own controls
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceEvent {
    /// Keyboard key, routed by phase
    Key(KeyInput),
    /// On-screen button; already resolved to a command
    Command(Command),
    /// Completed touch gesture
    Swipe { start_x: f64, end_x: f64 },
    Timer(TimerId),
    Video(VideoSignal),
    Audio(AudioSignal),
    /// Page is going away; stop timers and audio
    Dispose,
}
