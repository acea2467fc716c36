//! Screen transition state machine
//!
//! ```text
//! Locked --PinAccepted--> Unlocking --UnlockDelayElapsed--> PlayingVideo
//! PlayingVideo --VideoEnded | VideoFailed | FallbackTimeout--> Slideshow
//! ```
//!
//! The three exits from `PlayingVideo` race each other. The first one wins and
//! every later trigger is rejected, so the slideshow is entered exactly once
//! per unlock. `Slideshow` is terminal.

use std::fmt;
use std::time::Duration;

use crate::state::{AppState, Screen};
use crate::DomainError;

/// Cosmetic pause between a correct PIN and hiding the lock screen.
pub const UNLOCK_DELAY: Duration = Duration::from_millis(800);

/// Forces the slideshow if the intro video never reports an outcome.
pub const VIDEO_FALLBACK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Locked,
    Unlocking,
    PlayingVideo,
    Slideshow,
}

impl TransitionPhase {
    /// Screen that is visible during this phase.
    pub fn screen(self) -> Screen {
        match self {
            Self::Locked | Self::Unlocking => Screen::Locked,
            Self::PlayingVideo => Screen::Video,
            Self::Slideshow => Screen::Slideshow,
        }
    }

    /// PIN input is routed only while fully locked.
    pub fn accepts_pin_input(self) -> bool {
        self == Self::Locked
    }

    pub fn accepts_slideshow_input(self) -> bool {
        self == Self::Slideshow
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTrigger {
    PinAccepted,
    UnlockDelayElapsed,
    VideoEnded,
    VideoFailed,
    FallbackTimeout,
}

impl fmt::Display for TransitionTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PinAccepted => "PinAccepted",
            Self::UnlockDelayElapsed => "UnlockDelayElapsed",
            Self::VideoEnded => "VideoEnded",
            Self::VideoFailed => "VideoFailed",
            Self::FallbackTimeout => "FallbackTimeout",
        };
        f.write_str(name)
    }
}

/// Guarded one-shot transitions from lock screen to slideshow.
#[derive(Debug, Clone, Default)]
pub struct ScreenTransition {
    phase: TransitionPhase,
}

impl ScreenTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Apply `trigger`, returning the phase that was entered.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` when the trigger does not
    /// apply to the current phase. Callers treat this as a no-op.
    pub fn apply(
        &mut self,
        state: &mut AppState,
        trigger: TransitionTrigger,
    ) -> Result<TransitionPhase, DomainError> {
        use TransitionPhase as P;
        use TransitionTrigger as T;

        let next = match (self.phase, trigger) {
            (P::Locked, T::PinAccepted) => P::Unlocking,
            (P::Unlocking, T::UnlockDelayElapsed) => P::PlayingVideo,
            (P::PlayingVideo, T::VideoEnded | T::VideoFailed | T::FallbackTimeout) => P::Slideshow,
            (phase, trigger) => {
                return Err(DomainError::invalid_state_transition(format!(
                    "{phase:?} cannot accept {trigger}"
                )));
            }
        };

        let screen = next.screen();
        if screen != state.screen() {
            state.advance_screen(screen);
        }
        self.phase = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_video() -> (ScreenTransition, AppState) {
        let mut machine = ScreenTransition::new();
        let mut state = AppState::new();
        machine.apply(&mut state, TransitionTrigger::PinAccepted).unwrap();
        machine
            .apply(&mut state, TransitionTrigger::UnlockDelayElapsed)
            .unwrap();
        (machine, state)
    }

    #[test]
    fn unlocking_keeps_lock_screen_visible() {
        let mut machine = ScreenTransition::new();
        let mut state = AppState::new();
        let phase = machine.apply(&mut state, TransitionTrigger::PinAccepted).unwrap();
        assert_eq!(phase, TransitionPhase::Unlocking);
        assert_eq!(state.screen(), Screen::Locked);
        assert!(!phase.accepts_pin_input());
    }

    #[test]
    fn delay_moves_to_video() {
        let (machine, state) = playing_video();
        assert_eq!(machine.phase(), TransitionPhase::PlayingVideo);
        assert_eq!(state.screen(), Screen::Video);
    }

    #[test]
    fn every_video_exit_reaches_slideshow_exactly_once() {
        let exits = [
            TransitionTrigger::VideoEnded,
            TransitionTrigger::VideoFailed,
            TransitionTrigger::FallbackTimeout,
        ];

        for first in exits {
            let (mut machine, mut state) = playing_video();
            assert_eq!(
                machine.apply(&mut state, first).unwrap(),
                TransitionPhase::Slideshow
            );
            assert_eq!(state.screen(), Screen::Slideshow);

            for later in exits {
                assert!(machine.apply(&mut state, later).is_err());
            }
            assert_eq!(machine.phase(), TransitionPhase::Slideshow);
        }
    }

    #[test]
    fn video_exits_are_rejected_before_video_starts() {
        let mut machine = ScreenTransition::new();
        let mut state = AppState::new();
        let err = machine
            .apply(&mut state, TransitionTrigger::FallbackTimeout)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        assert_eq!(machine.phase(), TransitionPhase::Locked);
    }

    #[test]
    fn second_pin_acceptance_is_rejected() {
        let mut machine = ScreenTransition::new();
        let mut state = AppState::new();
        machine.apply(&mut state, TransitionTrigger::PinAccepted).unwrap();
        assert!(machine
            .apply(&mut state, TransitionTrigger::PinAccepted)
            .is_err());
    }

    #[test]
    fn slideshow_never_returns_to_locked() {
        let (mut machine, mut state) = playing_video();
        machine.apply(&mut state, TransitionTrigger::VideoEnded).unwrap();
        assert!(machine
            .apply(&mut state, TransitionTrigger::PinAccepted)
            .is_err());
        assert_eq!(state.screen(), Screen::Slideshow);
        assert!(machine.phase().accepts_slideshow_input());
    }
}
