//! View state for the greeting page
//!
//! Signals the components render from. The experience writes to them
//! through the [`SurfacePort`] implementation below.

use dioxus::prelude::*;
use keepsake_domain::{PlayState, SlideView};

use crate::ports::outbound::{LockIcon, Region, SurfacePort};

#[derive(Clone, Copy)]
pub struct ViewState {
    pub lock_visible: Signal<bool>,
    pub loading_visible: Signal<bool>,
    pub hint_visible: Signal<bool>,
    pub video_visible: Signal<bool>,
    pub slideshow_visible: Signal<bool>,
    /// One `*` per entered digit
    pub pin_mask: Signal<String>,
    pub shaking: Signal<bool>,
    pub lock_icon: Signal<LockIcon>,
    pub active_slide: Signal<usize>,
    pub progress_percent: Signal<f64>,
    pub auto_loop: Signal<bool>,
    pub countdown: Signal<String>,
    pub track_info: Signal<String>,
    pub play_state: Signal<PlayState>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            lock_visible: Signal::new(true),
            loading_visible: Signal::new(false),
            hint_visible: Signal::new(false),
            video_visible: Signal::new(false),
            slideshow_visible: Signal::new(false),
            pin_mask: Signal::new(String::new()),
            shaking: Signal::new(false),
            lock_icon: Signal::new(LockIcon::Closed),
            active_slide: Signal::new(0),
            progress_percent: Signal::new(0.0),
            auto_loop: Signal::new(false),
            countdown: Signal::new(String::new()),
            track_info: Signal::new(String::new()),
            play_state: Signal::new(PlayState::Paused),
        }
    }

    fn region(&self, region: Region) -> Signal<bool> {
        match region {
            Region::LockScreen => self.lock_visible,
            Region::Loading => self.loading_visible,
            Region::Hint => self.hint_visible,
            Region::Video => self.video_visible,
            Region::Slideshow => self.slideshow_visible,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfacePort for ViewState {
    fn set_visible(&self, region: Region, visible: bool) {
        self.region(region).set(visible);
    }

    fn render_pin(&self, masked: &str) {
        let mut pin_mask = self.pin_mask;
        pin_mask.set(masked.to_string());
    }

    fn set_shake(&self, shaking: bool) {
        let mut signal = self.shaking;
        signal.set(shaking);
    }

    fn set_lock_icon(&self, icon: LockIcon) {
        let mut signal = self.lock_icon;
        signal.set(icon);
    }

    fn show_slide(&self, view: SlideView) {
        let mut active = self.active_slide;
        let mut progress = self.progress_percent;
        active.set(view.index);
        progress.set(view.progress_percent);
    }

    fn set_auto_loop(&self, enabled: bool) {
        let mut signal = self.auto_loop;
        signal.set(enabled);
    }

    fn set_countdown(&self, text: &str) {
        let mut signal = self.countdown;
        signal.set(text.to_string());
    }

    fn set_track_info(&self, text: &str) {
        let mut signal = self.track_info;
        signal.set(text.to_string());
    }

    fn set_play_state(&self, state: PlayState) {
        let mut signal = self.play_state;
        signal.set(state);
    }
}
