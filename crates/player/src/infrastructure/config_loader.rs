//! Experience configuration loading
//!
//! Sources are tried in order and the first valid one wins:
//! 1. the file named by `KEEPSAKE_CONFIG` (desktop)
//! 2. `experience.json` in the platform config directory (desktop)
//! 3. the config embedded at build time
//! 4. the built-in default
//!
//! An invalid source is logged and skipped; startup never fails on config.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use anyhow::Context;
use keepsake_domain::ExperienceConfig;

pub const CONFIG_ENV_VAR: &str = "KEEPSAKE_CONFIG";
pub const CONFIG_FILE_NAME: &str = "experience.json";

const EMBEDDED_CONFIG: &str = include_str!("../../assets/experience.json");

/// Parse and validate a JSON config document.
pub fn parse_config(json: &str) -> anyhow::Result<ExperienceConfig> {
    let config: ExperienceConfig =
        serde_json::from_str(json).context("experience config is not valid JSON for the schema")?;
    config
        .validate()
        .context("experience config failed validation")?;
    Ok(config)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_config_file(path: &Path) -> anyhow::Result<ExperienceConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&json).with_context(|| format!("failed to load {}", path.display()))
}

/// Files to try, most specific first.
#[cfg(not(target_arch = "wasm32"))]
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(path));
    }
    if let Some(dirs) = directories::ProjectDirs::from("io", "keepsake", "player") {
        paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    paths
}

/// Load the configuration from the first valid source.
pub fn load_config() -> ExperienceConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(config) = load_from_files(&candidate_paths()) {
            return config;
        }
    }
    load_embedded(EMBEDDED_CONFIG)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_from_files(paths: &[PathBuf]) -> Option<ExperienceConfig> {
    for path in paths {
        if !path.exists() {
            tracing::debug!("No experience config at {}", path.display());
            continue;
        }
        match read_config_file(path) {
            Ok(config) => {
                tracing::info!("Loaded experience config from {}", path.display());
                return Some(config);
            }
            Err(e) => tracing::error!("Skipping experience config: {:#}", e),
        }
    }
    None
}

fn load_embedded(json: &str) -> ExperienceConfig {
    match parse_config(json) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Embedded experience config unusable, using defaults: {:#}", e);
            ExperienceConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CUSTOM: &str = r#"{
        "title": "Happy Birthday",
        "secret": "0412",
        "tracks": [{"primary": "a.mp3", "fallback": "a.ogg", "name": "Ours"}],
        "slides": [{"image": "one.jpg", "caption": "Day one"}],
        "countdown_template": "{days} days together"
    }"#;

    fn write_config(dir: &tempfile::TempDir, name: &str, json: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        path
    }

    #[test]
    fn embedded_config_matches_defaults() {
        let embedded = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(embedded, ExperienceConfig::default());
    }

    #[test]
    fn first_valid_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write_config(&dir, "broken.json", "{ not json");
        let custom = write_config(&dir, "custom.json", CUSTOM);
        let missing = dir.path().join("missing.json");

        let config = load_from_files(&[missing, broken, custom]).unwrap();
        assert_eq!(config.title, "Happy Birthday");
        assert_eq!(config.tracks[0].display_name(), "Ours");
        assert_eq!(config.countdown_template.render(5), "5 days together");
    }

    #[test]
    fn no_usable_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let empty_tracks = write_config(
            &dir,
            "empty.json",
            r#"{"secret": "1", "tracks": [], "slides": [{"image": "a.jpg"}]}"#,
        );
        assert!(load_from_files(&[empty_tracks]).is_none());
    }

    #[test]
    fn validation_errors_carry_context() {
        let err = parse_config(r#"{"secret": "1", "tracks": [], "slides": []}"#).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed validation"));
        assert!(message.contains("track"));
    }

    #[test]
    fn broken_embedded_config_falls_back_to_default() {
        assert_eq!(load_embedded("[]"), ExperienceConfig::default());
    }
}
