//! Input vocabulary and routing
//!
//! Raw keys, buttons and swipes are mapped to a [`Command`] for whichever
//! component owns the current phase. Anything that does not apply is dropped.

use crate::screen_transition::TransitionPhase;
use crate::slides::{classify_swipe, SwipeDirection};
use crate::value_objects::Digit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCommand {
    Digit(Digit),
    Backspace,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideCommand {
    Next,
    Prev,
    ToggleAutoLoop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    TogglePlayPause,
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pin(PinCommand),
    Slides(SlideCommand),
    Audio(AudioCommand),
}

impl Command {
    /// Whether the command may run during `phase`.
    pub fn applies_to(self, phase: TransitionPhase) -> bool {
        match self {
            Self::Pin(_) => phase.accepts_pin_input(),
            Self::Slides(_) | Self::Audio(_) => phase.accepts_slideshow_input(),
        }
    }
}

/// Keyboard keys the experience reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Digit(Digit),
    Backspace,
    Enter,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
}

impl KeyInput {
    /// Parse a DOM `KeyboardEvent.key` value.
    ///
    /// ```
    /// use keepsake_domain::input::KeyInput;
    ///
    /// assert_eq!(KeyInput::from_key_name("Enter"), Some(KeyInput::Enter));
    /// assert_eq!(KeyInput::from_key_name(" "), Some(KeyInput::Space));
    /// assert!(matches!(KeyInput::from_key_name("7"), Some(KeyInput::Digit(_))));
    /// assert_eq!(KeyInput::from_key_name("Escape"), None);
    /// ```
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Backspace" => Some(Self::Backspace),
            "Enter" => Some(Self::Enter),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            " " | "Spacebar" => Some(Self::Space),
            other => Digit::from_key(other).map(Self::Digit),
        }
    }
}

/// Map a key press to a command for the current phase.
pub fn route_key(phase: TransitionPhase, key: KeyInput) -> Option<Command> {
    let command = match key {
        KeyInput::Digit(d) => Command::Pin(PinCommand::Digit(d)),
        KeyInput::Backspace => Command::Pin(PinCommand::Backspace),
        KeyInput::Enter => Command::Pin(PinCommand::Confirm),
        KeyInput::ArrowLeft => Command::Slides(SlideCommand::Prev),
        KeyInput::ArrowRight => Command::Slides(SlideCommand::Next),
        KeyInput::ArrowUp => Command::Audio(AudioCommand::Prev),
        KeyInput::ArrowDown => Command::Audio(AudioCommand::Next),
        KeyInput::Space => Command::Audio(AudioCommand::TogglePlayPause),
    };
    command.applies_to(phase).then_some(command)
}

/// Map a completed touch to a slide command, if it was a swipe.
pub fn route_swipe(phase: TransitionPhase, start_x: f64, end_x: f64) -> Option<Command> {
    if !phase.accepts_slideshow_input() {
        return None;
    }
    classify_swipe(start_x, end_x).map(|direction| match direction {
        SwipeDirection::Next => Command::Slides(SlideCommand::Next),
        SwipeDirection::Prev => Command::Slides(SlideCommand::Prev),
    })
}

/// One cell of the phone-style keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadKey {
    pub label: &'static str,
    pub letters: &'static str,
}

impl KeypadKey {
    /// `None` for the decorative `*` and `#` keys.
    pub fn digit(&self) -> Option<Digit> {
        Digit::from_key(self.label)
    }

    pub fn aria_label(&self) -> String {
        format!("{} {}", self.label, self.letters).trim_end().to_string()
    }
}

/// 3x4 phone keypad, row by row.
pub const KEYPAD_LAYOUT: [KeypadKey; 12] = [
    KeypadKey { label: "1", letters: "" },
    KeypadKey { label: "2", letters: "ABC" },
    KeypadKey { label: "3", letters: "DEF" },
    KeypadKey { label: "4", letters: "GHI" },
    KeypadKey { label: "5", letters: "JKL" },
    KeypadKey { label: "6", letters: "MNO" },
    KeypadKey { label: "7", letters: "PQRS" },
    KeypadKey { label: "8", letters: "TUV" },
    KeypadKey { label: "9", letters: "WXYZ" },
    KeypadKey { label: "*", letters: "" },
    KeypadKey { label: "0", letters: "+" },
    KeypadKey { label: "#", letters: "" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    #[test]
    fn pin_keys_route_only_while_locked() {
        let key = KeyInput::Digit(digit('5'));
        assert_eq!(
            route_key(TransitionPhase::Locked, key),
            Some(Command::Pin(PinCommand::Digit(digit('5'))))
        );
        assert_eq!(route_key(TransitionPhase::Unlocking, key), None);
        assert_eq!(route_key(TransitionPhase::PlayingVideo, key), None);
        assert_eq!(route_key(TransitionPhase::Slideshow, key), None);
    }

    #[test]
    fn navigation_keys_route_only_in_slideshow() {
        assert_eq!(route_key(TransitionPhase::Locked, KeyInput::ArrowRight), None);
        assert_eq!(
            route_key(TransitionPhase::Slideshow, KeyInput::ArrowRight),
            Some(Command::Slides(SlideCommand::Next))
        );
        assert_eq!(
            route_key(TransitionPhase::Slideshow, KeyInput::ArrowLeft),
            Some(Command::Slides(SlideCommand::Prev))
        );
        assert_eq!(
            route_key(TransitionPhase::Slideshow, KeyInput::Space),
            Some(Command::Audio(AudioCommand::TogglePlayPause))
        );
        assert_eq!(
            route_key(TransitionPhase::Slideshow, KeyInput::ArrowUp),
            Some(Command::Audio(AudioCommand::Prev))
        );
        assert_eq!(
            route_key(TransitionPhase::Slideshow, KeyInput::ArrowDown),
            Some(Command::Audio(AudioCommand::Next))
        );
    }

    #[test]
    fn enter_and_backspace_are_ignored_in_slideshow() {
        assert_eq!(route_key(TransitionPhase::Slideshow, KeyInput::Enter), None);
        assert_eq!(route_key(TransitionPhase::Slideshow, KeyInput::Backspace), None);
    }

    #[test]
    fn swipes_route_only_in_slideshow() {
        assert_eq!(route_swipe(TransitionPhase::Locked, 300.0, 100.0), None);
        assert_eq!(
            route_swipe(TransitionPhase::Slideshow, 300.0, 100.0),
            Some(Command::Slides(SlideCommand::Next))
        );
        assert_eq!(
            route_swipe(TransitionPhase::Slideshow, 100.0, 300.0),
            Some(Command::Slides(SlideCommand::Prev))
        );
        assert_eq!(route_swipe(TransitionPhase::Slideshow, 100.0, 120.0), None);
    }

    #[test]
    fn keypad_symbols_are_not_digits() {
        let digits: Vec<char> = KEYPAD_LAYOUT
            .iter()
            .filter_map(KeypadKey::digit)
            .map(Digit::as_char)
            .collect();
        assert_eq!(digits, vec!['1', '2', '3', '4', '5', '6', '7', '8', '9', '0']);
    }

    #[test]
    fn aria_labels_include_letters() {
        assert_eq!(KEYPAD_LAYOUT[1].aria_label(), "2 ABC");
        assert_eq!(KEYPAD_LAYOUT[0].aria_label(), "1");
    }
}
