pub mod config_loader;
pub mod dispatcher;
pub mod document_input;
pub mod media;
pub mod particles;
pub mod platform;
pub mod scheduler;
mod script;

pub use dispatcher::{event_channel, EventDispatcher};

use std::future::Future;

/// Spawn a task on the Dioxus runtime that outlives the calling component.
pub fn spawn_task(fut: impl Future<Output = ()> + 'static) {
    let _task = dioxus::core::spawn_forever(fut);
}
