//! Presentation layer: components and the signal-backed view state

pub mod components;
pub mod state;
