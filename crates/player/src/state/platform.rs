//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` factory in platform/desktop.rs or platform/wasm.rs
//! - Injected into Dioxus context by `main`
//! - Accessed in UI via `use_context::<Platform>()`

use std::{future::Future, pin::Pin, sync::Arc};

use chrono::{DateTime, Utc};

use crate::ports::outbound::{ClockPort, SleepProvider, TimeProvider};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
/// Use via Dioxus context: `use_context::<Platform>()`
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now(&self) -> DateTime<Utc> {
        TimeProvider::now(self)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl Platform {
    pub fn new<T, S>(time: T, sleep: S) -> Self
    where
        T: TimeProvider + Send + Sync,
        S: SleepProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.time.now()
    }

    pub fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }
}

impl ClockPort for Platform {
    fn now(&self) -> DateTime<Utc> {
        Platform::now(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{MockSleepProvider, MockTimeProvider};
    use chrono::TimeZone;

    #[test]
    fn platform_delegates_to_providers() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let platform = Platform::new(MockTimeProvider::at(at), MockSleepProvider);
        assert_eq!(platform.now(), at);
        assert_eq!(ClockPort::now(&platform), at);
    }
}
