//! Persisted user settings.
//!
//! One small JSON file under the platform config directory holds the
//! theme choice and an optional backend URL override. The theme is
//! loaded once at startup and written back on every toggle.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::backend::DEFAULT_BASE_URL;

/// Visual theme for the whole workbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Contents of the settings file. Unknown fields are ignored so older
/// binaries can read files written by newer ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub backend_url: Option<String>,
}

/// Reads and writes the settings file.
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    /// Create a manager rooted at the platform config directory.
    ///
    /// Returns `None` when the config directory cannot be determined;
    /// the app then runs with defaults and skips persistence.
    pub fn new() -> Option<Self> {
        let dir = dirs::config_dir()?.join("codebench");
        Some(Self {
            path: dir.join("settings.json"),
        })
    }

    /// Create a manager with an explicit file path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load settings, falling back to defaults on a missing or
    /// unreadable file.
    pub fn load(&self) -> Settings {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return Settings::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings file: {}", e);
                Settings::default()
            }
        }
    }

    /// Write settings to disk, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(settings).wrap_err("Failed to serialize settings")?;
        fs::write(&self.path, json)
            .wrap_err_with(|| format!("Failed to write settings to {:?}", self.path))?;
        Ok(())
    }
}

/// Pick the backend base URL: environment override, then settings,
/// then the built-in default.
pub fn resolve_backend_url(env_override: Option<String>, settings: &Settings) -> String {
    env_override
        .filter(|url| !url.trim().is_empty())
        .or_else(|| settings.backend_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::with_path(dir.path().join("settings.json"));
        let settings = manager.load();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.backend_url.is_none());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::with_path(dir.path().join("nested").join("settings.json"));

        let settings = Settings {
            theme: Theme::Light,
            backend_url: Some("http://10.0.0.2:5000".to_string()),
        };
        manager.save(&settings).unwrap();

        // A second manager simulates a restart.
        let reloaded = manager.load();
        assert_eq!(reloaded.theme, Theme::Light);
        assert_eq!(reloaded.backend_url.as_deref(), Some("http://10.0.0.2:5000"));
    }

    #[test]
    fn test_load_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        let manager = SettingsManager::with_path(path);
        assert_eq!(manager.load().theme, Theme::Dark);
    }

    #[test]
    fn test_resolve_backend_url_precedence() {
        let settings = Settings {
            theme: Theme::Dark,
            backend_url: Some("http://from-settings:5000".to_string()),
        };
        assert_eq!(
            resolve_backend_url(Some("http://from-env:5000".to_string()), &settings),
            "http://from-env:5000"
        );
        assert_eq!(
            resolve_backend_url(None, &settings),
            "http://from-settings:5000"
        );
        assert_eq!(
            resolve_backend_url(Some("  ".to_string()), &Settings::default()),
            DEFAULT_BASE_URL
        );
    }
}
