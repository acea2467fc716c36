//! Slide rotation
//!
//! Exactly one slide is active at a time. Navigation wraps around, and an
//! optional auto-loop advances one slide per tick of a free-running timer.

use std::time::Duration;

use crate::state::AppState;
use crate::value_objects::{wrap_next, wrap_prev};
use crate::DomainError;

/// Period of the auto-loop tick.
pub const AUTO_LOOP_PERIOD: Duration = Duration::from_secs(4);

/// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Slide change produced by any navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideView {
    pub index: usize,
    /// `(index + 1) / count * 100`
    pub progress_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left
    Next,
    /// Finger moved left to right
    Prev,
}

/// Classify a touch from its start and end x coordinates.
///
/// ```
/// use keepsake_domain::slides::{classify_swipe, SwipeDirection};
///
/// assert_eq!(classify_swipe(300.0, 200.0), Some(SwipeDirection::Next));
/// assert_eq!(classify_swipe(100.0, 200.0), Some(SwipeDirection::Prev));
/// assert_eq!(classify_swipe(100.0, 130.0), None);
/// ```
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    if diff.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Prev)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SlideRotator {
    count: usize,
}

impl SlideRotator {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when there are no slides.
    pub fn new(count: usize) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::validation("slideshow needs at least one slide"));
        }
        Ok(Self { count })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Activate `index`. Callers pass an already wrapped index.
    pub fn show(&self, state: &mut AppState, index: usize) -> SlideView {
        state.current_slide = index;
        SlideView {
            index,
            progress_percent: (index + 1) as f64 * 100.0 / self.count as f64,
        }
    }

    pub fn next(&self, state: &mut AppState) -> SlideView {
        let index = wrap_next(state.current_slide, self.count);
        self.show(state, index)
    }

    pub fn prev(&self, state: &mut AppState) -> SlideView {
        let index = wrap_prev(state.current_slide, self.count);
        self.show(state, index)
    }

    /// Flip auto-loop and return the new value. Position is untouched.
    pub fn toggle_auto_loop(&self, state: &mut AppState) -> bool {
        state.auto_loop = !state.auto_loop;
        state.auto_loop
    }

    /// One auto-loop tick: advances only while auto-loop is enabled.
    pub fn tick(&self, state: &mut AppState) -> Option<SlideView> {
        if !state.auto_loop {
            return None;
        }
        Some(self.next(state))
    }
}

/// Text for the auto-loop toggle button.
pub fn auto_loop_label(enabled: bool) -> (&'static str, &'static str) {
    if enabled {
        ("🔄", "Auto-Loop: ON")
    } else {
        ("➿", "Auto-Loop: OFF")
    }
}
