//! Mock platform providers for tests

use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use chrono::{DateTime, Utc};

use crate::ports::outbound::platform::{SleepProvider, TimeProvider};
use crate::state::Platform;

/// Time provider that returns a settable instant
#[derive(Clone)]
pub struct MockTimeProvider {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockTimeProvider {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }
}

impl TimeProvider for MockTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|guard| *guard).unwrap_or_default()
    }
}

/// Sleep provider that completes immediately
#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async {})
    }
}

/// Platform wired with mock providers
pub fn create_mock_platform(now: DateTime<Utc>) -> Platform {
    Platform::new(MockTimeProvider::at(now), MockSleepProvider)
}
