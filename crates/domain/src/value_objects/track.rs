//! Background music track definition.

use serde::{Deserialize, Serialize};

/// A playlist entry with two alternate encodings of the same audio.
///
/// Tracks are loaded from configuration at startup and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Preferred source (served as `audio/mpeg`)
    #[serde(rename = "primary")]
    primary_source: String,
    /// Alternate source for platforms without the primary codec (`audio/ogg`)
    #[serde(rename = "fallback")]
    fallback_source: String,
    /// Name shown in the track-info line
    #[serde(rename = "name")]
    display_name: String,
}

impl Track {
    pub fn new(
        primary_source: impl Into<String>,
        fallback_source: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            primary_source: primary_source.into(),
            fallback_source: fallback_source.into(),
            display_name: display_name.into(),
        }
    }

    pub fn primary_source(&self) -> &str {
        &self.primary_source
    }

    pub fn fallback_source(&self) -> &str {
        &self.fallback_source
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
