//! Background music playlist
//!
//! Owns the static track list and the "is audio engaged" flag. The current
//! track index lives in [`AppState`] and always wraps around the list.

use std::time::Duration;

use crate::state::AppState;
use crate::value_objects::{wrap_next, wrap_prev, Track};
use crate::DomainError;

/// Pause between loading a new source and resuming playback.
pub const RESUME_GRACE: Duration = Duration::from_millis(100);

/// Play/pause indicator shown on the music controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    Playing,
    #[default]
    Paused,
}

impl PlayState {
    /// Icon for the toggle button, which offers the opposite action.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Playing => "⏸️",
            Self::Paused => "▶️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Playing => "Pause",
            Self::Paused => "Play",
        }
    }
}

/// A track change, and whether playback should resume after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSwitch {
    pub index: usize,
    pub resume: bool,
}

#[derive(Debug, Clone)]
pub struct AudioPlaylist {
    tracks: Vec<Track>,
    playing: bool,
}

impl AudioPlaylist {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty track list.
    pub fn new(tracks: Vec<Track>) -> Result<Self, DomainError> {
        if tracks.is_empty() {
            return Err(DomainError::validation("playlist needs at least one track"));
        }
        Ok(Self {
            tracks,
            playing: false,
        })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn current<'a>(&'a self, state: &AppState) -> Option<&'a Track> {
        self.tracks.get(state.current_track)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play_state(&self) -> PlayState {
        if self.playing {
            PlayState::Playing
        } else {
            PlayState::Paused
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Select `index` as the current track. Out-of-range indices are ignored.
    pub fn load<'a>(&'a self, state: &mut AppState, index: usize) -> Option<&'a Track> {
        let track = self.tracks.get(index)?;
        state.current_track = index;
        Some(track)
    }

    /// Advance to the following track, wrapping at the end.
    pub fn next(&self, state: &mut AppState) -> TrackSwitch {
        let index = wrap_next(state.current_track, self.tracks.len());
        self.switch_to(state, index, self.playing)
    }

    /// Step back to the previous track, wrapping at the start.
    pub fn prev(&self, state: &mut AppState) -> TrackSwitch {
        let index = wrap_prev(state.current_track, self.tracks.len());
        self.switch_to(state, index, self.playing)
    }

    /// Auto-advance after the current track finished playing.
    pub fn advance_after_end(&self, state: &mut AppState) -> TrackSwitch {
        let index = wrap_next(state.current_track, self.tracks.len());
        self.switch_to(state, index, true)
    }

    fn switch_to(&self, state: &mut AppState, index: usize, resume: bool) -> TrackSwitch {
        state.current_track = index;
        TrackSwitch { index, resume }
    }

    /// `"{name} ({position} of {count})"`
    pub fn track_info(&self, state: &AppState) -> String {
        match self.current(state) {
            Some(track) => format!(
                "{} ({} of {})",
                track.display_name(),
                state.current_track + 1,
                self.tracks.len()
            ),
            None => String::new(),
        }
    }

    /// `"Loading {name}..."`
    pub fn loading_info(&self, state: &AppState) -> String {
        match self.current(state) {
            Some(track) => format!("Loading {}...", track.display_name()),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(n: usize) -> AudioPlaylist {
        let tracks = (1..=n)
            .map(|i| {
                Track::new(
                    format!("assets/music/track{i}.mp3"),
                    format!("assets/music/track{i}.ogg"),
                    format!("Track {i}"),
                )
            })
            .collect();
        AudioPlaylist::new(tracks).unwrap()
    }

    #[test]
    fn rejects_empty_track_list() {
        assert!(AudioPlaylist::new(Vec::new()).is_err());
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let playlist = playlist(4);
        let mut state = AppState::new();
        let switch = playlist.prev(&mut state);
        assert_eq!(switch.index, 3);
        assert_eq!(state.current_track(), 3);
        assert_eq!(playlist.track_info(&state), "Track 4 (4 of 4)");
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let playlist = playlist(4);
        let mut state = AppState::new();
        playlist.load(&mut state, 3);
        assert_eq!(playlist.next(&mut state).index, 0);
    }

    #[test]
    fn load_ignores_out_of_range() {
        let playlist = playlist(4);
        let mut state = AppState::new();
        playlist.load(&mut state, 2);
        assert!(playlist.load(&mut state, 4).is_none());
        assert_eq!(state.current_track(), 2);
    }

    #[test]
    fn resume_follows_playing_flag_for_manual_switches() {
        let mut playlist = playlist(3);
        let mut state = AppState::new();
        assert!(!playlist.next(&mut state).resume);

        playlist.set_playing(true);
        assert!(playlist.prev(&mut state).resume);
    }

    #[test]
    fn end_of_track_always_resumes() {
        let playlist = playlist(3);
        let mut state = AppState::new();
        let switch = playlist.advance_after_end(&mut state);
        assert_eq!(switch, TrackSwitch { index: 1, resume: true });
    }

    #[test]
    fn info_lines() {
        let playlist = playlist(4);
        let mut state = AppState::new();
        playlist.load(&mut state, 1);
        assert_eq!(playlist.track_info(&state), "Track 2 (2 of 4)");
        assert_eq!(playlist.loading_info(&state), "Loading Track 2...");
    }

    #[test]
    fn play_state_labels_offer_the_opposite_action() {
        assert_eq!(PlayState::Paused.label(), "Play");
        assert_eq!(PlayState::Paused.icon(), "▶️");
        assert_eq!(PlayState::Playing.label(), "Pause");
        assert_eq!(PlayState::Playing.icon(), "⏸️");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn index_stays_in_range(
                len in 1usize..12,
                start in 0usize..12,
                steps in proptest::collection::vec(any::<bool>(), 0..100),
            ) {
                let playlist = playlist(len);
                let mut state = AppState::new();
                playlist.load(&mut state, start % len);
                for forward in steps {
                    if forward { playlist.next(&mut state); } else { playlist.prev(&mut state); }
                    prop_assert!(state.current_track() < len);
                    prop_assert!(playlist.current(&state).is_some());
                }
            }
        }
    }
}
