//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use std::{future::Future, pin::Pin};

use chrono::{DateTime, Utc};

/// Wall clock abstraction
pub trait TimeProvider: Clone + 'static {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// Async sleep abstraction
///
/// Used by the timer scheduler so it needs no `#[cfg]` branches.
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}
