//! Greeting page components

pub mod keypad;
pub mod lock_screen;
pub mod music_controls;
pub mod slideshow;
pub mod video_screen;

pub use keypad::Keypad;
pub use lock_screen::LockScreen;
pub use music_controls::MusicControls;
pub use slideshow::Slideshow;
pub use video_screen::VideoScreen;

/// Class list for a region that is toggled with the `hidden` class.
pub(crate) fn region_class(base: &str, visible: bool) -> String {
    if visible {
        base.to_string()
    } else {
        format!("{base} hidden")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_regions_get_hidden_class() {
        assert_eq!(region_class("lock-screen", true), "lock-screen");
        assert_eq!(region_class("lock-screen", false), "lock-screen hidden");
    }
}
