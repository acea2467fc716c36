//! Application services
//!
//! Each service pairs a domain component with the ports it drives. All of
//! them take the shared [`AppState`](keepsake_domain::AppState) by `&mut`
//! so there is exactly one owner of the state.

pub mod ambient_service;
pub mod audio_playlist_service;
pub mod pin_gate_service;
pub mod screen_transition_service;
pub mod slide_rotator_service;

pub use ambient_service::AmbientService;
pub use audio_playlist_service::AudioPlaylistService;
pub use pin_gate_service::PinGateService;
pub use screen_transition_service::ScreenTransitionService;
pub use slide_rotator_service::SlideRotatorService;
