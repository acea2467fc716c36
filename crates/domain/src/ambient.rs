//! Ambient effects: the day counter and particle bursts.
//!
//! Purely cosmetic. Nothing here affects the screen flow.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// How often the day counter is recomputed.
pub const COUNTDOWN_REFRESH: Duration = Duration::from_secs(24 * 60 * 60);

/// Interval between recurring particle bursts.
pub const PARTICLE_INTERVAL: Duration = Duration::from_secs(8);

/// Placeholder replaced by the day count.
pub const DAYS_PLACEHOLDER: &str = "{days}";

/// Colors shared by every burst.
pub const BURST_PALETTE: [&str; 4] = ["#667eea", "#764ba2", "#f093fb", "#f5576c"];

/// Whole days between `start` and `now`, floored and never negative.
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use keepsake_domain::ambient::days_elapsed;
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// let now = start + Duration::days(3) + Duration::hours(2);
/// assert_eq!(days_elapsed(start, now), 3);
/// ```
pub fn days_elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_days().max(0)
}

/// Message template for the day counter (validated newtype)
///
/// Must contain the `{days}` placeholder exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountdownTemplate(String);

impl CountdownTemplate {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `{days}` is missing.
    pub fn new(template: impl Into<String>) -> Result<Self, DomainError> {
        let template = template.into();
        if !template.contains(DAYS_PLACEHOLDER) {
            return Err(DomainError::validation(format!(
                "countdown template must contain {DAYS_PLACEHOLDER}"
            )));
        }
        Ok(Self(template))
    }

    pub fn render(&self, days: i64) -> String {
        self.0.replace(DAYS_PLACEHOLDER, &days.to_string())
    }

    pub fn render_since(&self, start: DateTime<Utc>, now: DateTime<Utc>) -> String {
        self.render(days_elapsed(start, now))
    }
}

impl Default for CountdownTemplate {
    fn default() -> Self {
        Self("It's been {days} days since we started speaking.".to_string())
    }
}

impl From<CountdownTemplate> for String {
    fn from(template: CountdownTemplate) -> Self {
        template.0
    }
}

impl TryFrom<String> for CountdownTemplate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Where bursts originate, as fractions of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BurstOrigin {
    pub y: f64,
}

/// Parameters handed to the particle renderer.
///
/// Serializes to the option object the confetti renderer expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstSpec {
    pub particle_count: u32,
    /// Spread angle in degrees
    pub spread: f64,
    pub origin: BurstOrigin,
    pub colors: Vec<&'static str>,
}

impl BurstSpec {
    /// Large burst fired as soon as the slideshow appears.
    pub fn opening() -> Self {
        Self::with(200, 80.0)
    }

    /// Smaller, wider burst repeated every [`PARTICLE_INTERVAL`].
    pub fn recurring() -> Self {
        Self::with(50, 120.0)
    }

    fn with(particle_count: u32, spread: f64) -> Self {
        Self {
            particle_count,
            spread,
            origin: BurstOrigin { y: 0.6 },
            colors: BURST_PALETTE.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn counts_whole_days_only() {
        let t = start();
        assert_eq!(days_elapsed(t, t), 0);
        assert_eq!(days_elapsed(t, t + ChronoDuration::hours(23)), 0);
        assert_eq!(days_elapsed(t, t + ChronoDuration::hours(24)), 1);
        assert_eq!(
            days_elapsed(t, t + ChronoDuration::days(3) + ChronoDuration::hours(2)),
            3
        );
    }

    #[test]
    fn clock_skew_never_goes_negative() {
        let t = start();
        assert_eq!(days_elapsed(t, t - ChronoDuration::days(2)), 0);
    }

    #[test]
    fn template_renders_days() {
        let template = CountdownTemplate::new("It's been {days} days").unwrap();
        let t = start();
        let now = t + ChronoDuration::days(3) + ChronoDuration::hours(2);
        assert_eq!(template.render_since(t, now), "It's been 3 days");
    }

    #[test]
    fn template_requires_placeholder() {
        assert!(CountdownTemplate::new("It's been a while").is_err());
        assert!(serde_json::from_str::<CountdownTemplate>("\"no days\"").is_err());
    }

    #[test]
    fn default_template_is_valid() {
        let template = CountdownTemplate::default();
        assert!(CountdownTemplate::new(String::from(template)).is_ok());
    }

    #[test]
    fn bursts_serialize_as_renderer_options() {
        let json = serde_json::to_value(BurstSpec::opening()).unwrap();
        assert_eq!(json["particleCount"], 200);
        assert_eq!(json["spread"], 80.0);
        assert_eq!(json["origin"]["y"], 0.6);
        assert_eq!(json["colors"].as_array().map(Vec::len), Some(4));

        let recurring = BurstSpec::recurring();
        assert_eq!(recurring.particle_count, 50);
        assert_eq!(recurring.spread, 120.0);
    }
}
