/// User settings for the slideshow
///
/// Timing of the intro transitions, optional auto-play and the theme.
/// Stored as JSON next to the other per-user config files; every field
/// falls back to its default when absent.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Color scheme of the window
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// All user-tunable settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// How long the intro keeps its layout space after the start action (ms)
    pub reveal_delay_ms: u64,

    /// Pause between restoring the intro's layout and fading it back in (ms)
    pub dismiss_delay_ms: u64,

    /// Advance to the next slide on this interval while revealed (ms).
    /// `None` disables auto-play.
    pub autoplay_ms: Option<u64>,

    pub theme: ThemeChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 500,
            dismiss_delay_ms: 10,
            autoplay_ms: None,
            theme: ThemeChoice::Dark,
        }
    }
}

/// Delays the controller applies to its deferred transition steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub reveal_delay: Duration,
    pub dismiss_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Settings::default().timing()
    }
}

impl Settings {
    /// Parse from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn timing(&self) -> Timing {
        Timing {
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
            dismiss_delay: Duration::from_millis(self.dismiss_delay_ms),
        }
    }

    /// Auto-play interval, if enabled. A zero interval counts as disabled.
    pub fn autoplay(&self) -> Option<Duration> {
        self.autoplay_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Get the path where the settings file is expected
    ///
    /// - Linux: ~/.config/slide-deck/settings.json
    /// - macOS: ~/Library/Application Support/slide-deck/settings.json
    /// - Windows: %APPDATA%\slide-deck\settings.json
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("slide-deck");
        path.push("settings.json");
        Some(path)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("⚙️  No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::SettingsIo(e)),
        };

        let settings = Self::from_json(&json).map_err(Error::Settings)?;
        log::info!("⚙️  Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults on any
    /// problem. Startup never fails because of a bad settings file.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_timing() {
        let timing = Settings::default().timing();
        assert_eq!(timing.reveal_delay, Duration::from_millis(500));
        assert_eq!(timing.dismiss_delay, Duration::from_millis(10));
        assert_eq!(Settings::default().autoplay(), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "autoplay_ms": 7000, "theme": "light" }"#).unwrap();

        assert_eq!(settings.autoplay(), Some(Duration::from_millis(7000)));
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.reveal_delay_ms, 500);
        assert_eq!(settings.dismiss_delay_ms, 10);
    }

    #[test]
    fn test_zero_autoplay_is_disabled() {
        let settings = Settings {
            autoplay_ms: Some(0),
            ..Settings::default()
        };
        assert_eq!(settings.autoplay(), None);
    }

    #[test]
    fn test_serialization() {
        let settings = Settings {
            reveal_delay_ms: 250,
            theme: ThemeChoice::Light,
            ..Settings::default()
        };

        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("\"light\""));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("slide-deck-test-missing/settings.json");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("slide-deck-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, "{ \"theme\": \"sepia\" }").unwrap();

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(Error::Settings(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
