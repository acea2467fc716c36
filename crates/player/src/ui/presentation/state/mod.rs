//! Presentation state
//!
//! Signal-backed state shared with components through Dioxus context.

pub mod view_state;

pub use view_state::ViewState;
