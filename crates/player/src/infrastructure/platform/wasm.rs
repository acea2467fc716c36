//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! js-sys and gloo timers.

use std::{future::Future, pin::Pin};

use chrono::{DateTime, Utc};

use crate::ports::outbound::platform::{SleepProvider, TimeProvider};
use crate::state::Platform;

/// Browser time provider backed by `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        let millis = js_sys::Date::now() as i64;
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
}

/// Browser sleep provider using gloo timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(gloo_timers::future::sleep(std::time::Duration::from_millis(ms)))
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(WasmTimeProvider, WasmSleepProvider)
}
