//! Value objects - Immutable objects defined by their attributes

mod digit;
mod secret;
mod slide;
mod track;
mod wrapping;

pub use digit::Digit;
pub use secret::Secret;
pub use slide::Slide;
pub use track::Track;
pub use wrapping::{wrap_next, wrap_prev};
