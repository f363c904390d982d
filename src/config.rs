use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PreviewError, Result};
use crate::state::{Delays, DEFAULT_REPLY_DELAY, DEFAULT_REWRITE_DELAY};
use crate::validation;

pub const DEFAULT_THEME: &str = "dark";

/// Persisted preferences. Conversation content is never stored here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub reply_delay_ms: u64,
    pub rewrite_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY.as_millis() as u64,
            rewrite_delay_ms: DEFAULT_REWRITE_DELAY.as_millis() as u64,
        }
    }
}

impl Settings {
    /// Delays with out-of-range values clamped.
    pub fn delays(&self) -> Delays {
        Delays {
            reply: validation::clamp_delay(self.reply_delay_ms),
            rewrite: validation::clamp_delay(self.rewrite_delay_ms),
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "tone-preview", "tone-preview")
        .ok_or(PreviewError::NoConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data)?;
    Ok(())
}

/// Load settings from the platform config dir, falling back to defaults.
pub fn load_settings() -> Settings {
    match settings_path().and_then(|p| load_settings_from(&p)) {
        Ok(settings) => settings,
        Err(PreviewError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "using default settings");
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&settings_path()?, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tone-preview-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_settings_roundtrip_through_file() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            theme: "light".into(),
            reply_delay_ms: 300,
            rewrite_delay_ms: 200,
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.reply_delay_ms, 1500);
        assert_eq!(settings.rewrite_delay_ms, 1000);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(PreviewError::Json(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_delays_are_clamped() {
        let settings = Settings {
            reply_delay_ms: 1,
            rewrite_delay_ms: 60_000,
            ..Settings::default()
        };
        let delays = settings.delays();
        assert_eq!(delays.reply, Duration::from_millis(validation::MIN_DELAY_MS));
        assert_eq!(delays.rewrite, Duration::from_millis(validation::MAX_DELAY_MS));
        assert_eq!(Settings::default().delays(), Delays::default());
    }
}
