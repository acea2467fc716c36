//! Static experience configuration
//!
//! Loaded once at startup. Value objects validate themselves on
//! deserialization; [`ExperienceConfig::validate`] checks the collection-level
//! rules that serde cannot express.

use serde::{Deserialize, Serialize};

use crate::ambient::CountdownTemplate;
use crate::value_objects::{Secret, Slide, Track};
use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceConfig {
    #[serde(default = "default_title")]
    pub title: String,
    pub secret: Secret,
    pub tracks: Vec<Track>,
    pub slides: Vec<Slide>,
    #[serde(default = "default_intro_video")]
    pub intro_video: String,
    /// Revealed after repeated wrong PINs
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub countdown_template: CountdownTemplate,
}

fn default_title() -> String {
    "For You".to_string()
}

fn default_intro_video() -> String {
    "assets/video/intro.mp4".to_string()
}

impl ExperienceConfig {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when there are no tracks or no slides.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tracks.is_empty() {
            return Err(DomainError::validation("at least one track is required"));
        }
        if self.slides.is_empty() {
            return Err(DomainError::validation("at least one slide is required"));
        }
        Ok(())
    }
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        let tracks = (1..=4)
            .map(|i| {
                Track::new(
                    format!("assets/music/track{i}.mp3"),
                    format!("assets/music/track{i}.ogg"),
                    format!("Track {i}"),
                )
            })
            .collect();

        let slides = ["pic1", "pic2", "pic3", "final_surprise"]
            .into_iter()
            .map(|name| Slide::new(format!("assets/images/{name}.jpg"), ""))
            .collect();

        Self {
            title: default_title(),
            secret: Secret::new_unchecked("1906"),
            tracks,
            slides,
            intro_video: default_intro_video(),
            hint: "Hint: the year it all began".to_string(),
            countdown_template: CountdownTemplate::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = ExperienceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.secret.len(), 4);
        assert_eq!(config.tracks.len(), 4);
        assert_eq!(config.tracks[0].primary_source(), "assets/music/track1.mp3");
        assert_eq!(config.tracks[3].display_name(), "Track 4");
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "secret": "2468",
            "tracks": [{"primary": "a.mp3", "fallback": "a.ogg", "name": "A"}],
            "slides": [{"image": "one.jpg"}]
        }"#;
        let config: ExperienceConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.title, "For You");
        assert_eq!(config.slides[0].caption, "");
        assert_eq!(config.countdown_template, CountdownTemplate::default());
    }

    #[test]
    fn invalid_secret_fails_deserialization() {
        let json = r#"{"secret": "12ab", "tracks": [], "slides": []}"#;
        assert!(serde_json::from_str::<ExperienceConfig>(json).is_err());
    }

    #[test]
    fn empty_collections_fail_validation() {
        let mut config = ExperienceConfig::default();
        config.slides.clear();
        assert!(config.validate().is_err());

        let mut config = ExperienceConfig::default();
        config.tracks.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("track"));
    }
}
