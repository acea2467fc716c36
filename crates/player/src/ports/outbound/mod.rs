//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the experience to drive the page, media elements and timers
//! without depending on concrete implementations.

pub mod clock_port;
pub mod experience_events;
pub mod media_port;
pub mod particle_port;
pub mod platform;
pub mod scheduler_port;
pub mod surface_port;
pub mod testing;

pub use clock_port::ClockPort;
pub use experience_events::{AudioSignal, ExperienceEvent, TimerId, VideoSignal};
pub use media_port::{AudioPort, MediaError, VideoPort};
pub use particle_port::ParticlePort;
pub use platform::{SleepProvider, TimeProvider};
pub use scheduler_port::SchedulerPort;
pub use surface_port::{LockIcon, Region, SurfacePort};
