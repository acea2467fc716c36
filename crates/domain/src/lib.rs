//! Keepsake domain: the rules of the greeting experience.
//!
//! Pure state and transitions with no UI, timers or platform access. The
//! player crate drives these types from its event loop.

pub mod ambient;
pub mod config;
pub mod error;
pub mod input;
pub mod pin_gate;
pub mod playlist;
pub mod screen_transition;
pub mod slides;
pub mod state;
pub mod value_objects;

pub use ambient::{days_elapsed, BurstSpec, CountdownTemplate};
pub use config::ExperienceConfig;
pub use error::DomainError;
pub use input::{route_key, route_swipe, AudioCommand, Command, KeyInput, PinCommand, SlideCommand};
pub use pin_gate::{DigitOutcome, PinGate, VerifyOutcome};
pub use playlist::{AudioPlaylist, PlayState, TrackSwitch};
pub use screen_transition::{ScreenTransition, TransitionPhase, TransitionTrigger};
pub use slides::{SlideRotator, SlideView};
pub use state::{AppState, Screen};
pub use value_objects::{Digit, Secret, Slide, Track};
