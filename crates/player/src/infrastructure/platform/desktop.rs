//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use std::{future::Future, pin::Pin};

use chrono::{DateTime, Utc};

use crate::ports::outbound::platform::{SleepProvider, TimeProvider};
use crate::state::Platform;

/// Desktop time provider using the system clock
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(DesktopTimeProvider, DesktopSleepProvider)
}
