//! Application layer
//!
//! Services wrap one domain component each and talk to the outside world
//! through outbound ports. [`Experience`] owns them and routes events.

pub mod experience;
pub mod services;

pub use experience::{Experience, ExperiencePorts};
