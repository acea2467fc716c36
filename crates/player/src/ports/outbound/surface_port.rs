//! Surface port - what the experience shows on screen
//!
//! The experience never touches the DOM. It tells the surface what to
//! display and the presentation layer renders it.

use keepsake_domain::{PlayState, SlideView};

/// Areas of the page whose visibility the experience controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    LockScreen,
    /// Loading indicator shown while unlocking
    Loading,
    Hint,
    Video,
    Slideshow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockIcon {
    #[default]
    Closed,
    Open,
}

impl LockIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Closed => "🔒",
            Self::Open => "🔓",
        }
    }
}

pub trait SurfacePort {
    fn set_visible(&self, region: Region, visible: bool);

    /// Masked PIN entry, one `*` per digit.
    fn render_pin(&self, masked: &str);

    fn set_shake(&self, shaking: bool);

    fn set_lock_icon(&self, icon: LockIcon);

    fn show_slide(&self, view: SlideView);

    fn set_auto_loop(&self, enabled: bool);

    fn set_countdown(&self, text: &str);

    fn set_track_info(&self, text: &str);

    fn set_play_state(&self, state: PlayState);
}
