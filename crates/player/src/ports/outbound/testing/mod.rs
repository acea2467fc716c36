//! Test utilities for outbound ports
//!
//! Recording fakes for the ports whose call history tests assert on.
//! These are available when the `testing` feature is enabled.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ports::outbound::testing::{ManualScheduler, RecordingAudio, RecordingSurface};
//! ```

#[cfg(any(test, feature = "testing"))]
mod manual_scheduler;
#[cfg(any(test, feature = "testing"))]
mod recording_audio;
#[cfg(any(test, feature = "testing"))]
mod recording_surface;

#[cfg(any(test, feature = "testing"))]
pub use manual_scheduler::{ManualScheduler, ScheduledTimer};
#[cfg(any(test, feature = "testing"))]
pub use recording_audio::{AudioCall, RecordingAudio};
#[cfg(any(test, feature = "testing"))]
pub use recording_surface::{RecordingSurface, SurfaceCall};
