//! Shared view state
//!
//! A single explicit state object owned by the experience orchestrator and
//! passed by reference to each manager. Created once at startup, mutated in
//! place, discarded on unload.

use chrono::{DateTime, Utc};

use crate::value_objects::Digit;

/// Which top-level screen is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Locked,
    Video,
    Slideshow,
}

impl Screen {
    /// Screens only move forward; a failed unlock simply stays on `Locked`.
    pub fn can_advance_to(self, next: Screen) -> bool {
        matches!(
            (self, next),
            (Screen::Locked, Screen::Video) | (Screen::Video, Screen::Slideshow)
        )
    }
}

/// Mutable state shared by the PIN gate, playlist and slide rotator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    screen: Screen,
    pub(crate) entered_digits: Vec<Digit>,
    pub(crate) wrong_attempts: u32,
    pub(crate) hint_visible: bool,
    pub(crate) current_slide: usize,
    pub(crate) current_track: usize,
    pub(crate) auto_loop: bool,
    pub(crate) session_start: Option<DateTime<Utc>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Move to `next` if it is the forward neighbour of the current screen.
    ///
    /// Returns `false` (and leaves the screen untouched) otherwise.
    pub fn advance_screen(&mut self, next: Screen) -> bool {
        if !self.screen.can_advance_to(next) {
            return false;
        }
        self.screen = next;
        true
    }

    pub fn entered_digits(&self) -> &[Digit] {
        &self.entered_digits
    }

    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn current_track(&self) -> usize {
        self.current_track
    }

    pub fn auto_loop(&self) -> bool {
        self.auto_loop
    }

    pub fn session_start(&self) -> Option<DateTime<Utc>> {
        self.session_start
    }

    /// Record when the slideshow began. Only the first call has an effect.
    pub fn begin_session(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        *self.session_start.get_or_insert(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn starts_locked_and_empty() {
        let state = AppState::new();
        assert_eq!(state.screen(), Screen::Locked);
        assert!(state.entered_digits().is_empty());
        assert_eq!(state.wrong_attempts(), 0);
        assert!(!state.hint_visible());
        assert!(!state.auto_loop());
        assert!(state.session_start().is_none());
    }

    #[test]
    fn screens_only_move_forward() {
        let mut state = AppState::new();
        assert!(!state.advance_screen(Screen::Slideshow));
        assert!(state.advance_screen(Screen::Video));
        assert!(!state.advance_screen(Screen::Locked));
        assert!(state.advance_screen(Screen::Slideshow));
        assert!(!state.advance_screen(Screen::Locked));
        assert!(!state.advance_screen(Screen::Video));
        assert_eq!(state.screen(), Screen::Slideshow);
    }

    #[test]
    fn session_start_is_captured_once() {
        let mut state = AppState::new();
        let first = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();

        assert_eq!(state.begin_session(first), first);
        assert_eq!(state.begin_session(later), first);
        assert_eq!(state.session_start(), Some(first));
    }
}
