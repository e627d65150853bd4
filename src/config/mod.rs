// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Startup view mode and transient captions
//! - `[chrome]` - Toolbar/thumbnail strip geometry, poll period and animations
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_SLIDES_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_slides::config;
//!
//! let (config, _warning) = config::load();
//! let chrome = config.chrome.resolve();
//! println!("toolbar height: {}", chrome.toolbar_height);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Viewer behaviour.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Start in carousel mode instead of the simple view.
    #[serde(default)]
    pub start_in_carousel: Option<bool>,

    /// Show transient captions ("Carousel view", "View reset", ...).
    #[serde(default = "default_captions")]
    pub captions: Option<bool>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start_in_carousel: Some(false),
            captions: default_captions(),
        }
    }
}

/// Toolbar and thumbnail strip settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChromeConfig {
    #[serde(default = "default_toolbar_height")]
    pub toolbar_height: Option<f32>,

    #[serde(default = "default_strip_height")]
    pub strip_height: Option<f32>,

    /// Chrome poll period in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: Option<u64>,

    /// Show/hide and slide animation duration in milliseconds.
    #[serde(default = "default_animation_ms")]
    pub animation_ms: Option<u64>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            toolbar_height: default_toolbar_height(),
            strip_height: default_strip_height(),
            poll_interval_ms: default_poll_interval_ms(),
            animation_ms: default_animation_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub chrome: ChromeConfig,
}

/// Chrome settings resolved from the config and clamped to supported bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeSettings {
    pub toolbar_height: f32,
    pub strip_height: f32,
    pub poll_interval: Duration,
    pub animation: Duration,
}

impl Default for ChromeSettings {
    fn default() -> Self {
        ChromeConfig::default().resolve()
    }
}

impl ChromeConfig {
    /// Fills missing values with defaults and clamps out-of-range ones so a
    /// hand-edited file cannot produce a zero-height toolbar or a busy loop.
    pub fn resolve(&self) -> ChromeSettings {
        let toolbar_height = self
            .toolbar_height
            .unwrap_or(DEFAULT_TOOLBAR_HEIGHT)
            .clamp(MIN_TOOLBAR_HEIGHT, MAX_TOOLBAR_HEIGHT);
        let strip_height = self
            .strip_height
            .unwrap_or(DEFAULT_STRIP_HEIGHT)
            .clamp(MIN_STRIP_HEIGHT, MAX_STRIP_HEIGHT);
        let poll_interval_ms = self
            .poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS);
        let animation_ms = self
            .animation_ms
            .unwrap_or(DEFAULT_ANIMATION_MS)
            .min(MAX_ANIMATION_MS);

        ChromeSettings {
            toolbar_height,
            strip_height,
            poll_interval: Duration::from_millis(poll_interval_ms),
            animation: Duration::from_millis(animation_ms),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_captions() -> Option<bool> {
    Some(true)
}

fn default_toolbar_height() -> Option<f32> {
    Some(DEFAULT_TOOLBAR_HEIGHT)
}

fn default_strip_height() -> Option<f32> {
    Some(DEFAULT_STRIP_HEIGHT)
}

fn default_poll_interval_ms() -> Option<u64> {
    Some(DEFAULT_POLL_INTERVAL_MS)
}

fn default_animation_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(err.i18n_key().to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"light\"\n\n\
             [viewer]\nstart_in_carousel = true\ncaptions = false\n\n\
             [chrome]\ntoolbar_height = 64.0\n",
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        let expected = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            viewer: ViewerConfig {
                start_in_carousel: Some(true),
                captions: Some(false),
            },
            chrome: ChromeConfig {
                toolbar_height: Some(64.0),
                ..ChromeConfig::default()
            },
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[viewer]\nstart_in_carousel = true\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.viewer.start_in_carousel, Some(true));
        assert_eq!(loaded.viewer.captions, Some(true));
        assert_eq!(loaded.chrome, ChromeConfig::default());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_read_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Dark\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn chrome_settings_are_clamped() {
        let chrome = ChromeConfig {
            toolbar_height: Some(1.0),
            strip_height: Some(10_000.0),
            poll_interval_ms: Some(0),
            animation_ms: Some(60_000),
        };
        let settings = chrome.resolve();
        assert_eq!(settings.toolbar_height, MIN_TOOLBAR_HEIGHT);
        assert_eq!(settings.strip_height, MAX_STRIP_HEIGHT);
        assert_eq!(
            settings.poll_interval,
            Duration::from_millis(MIN_POLL_INTERVAL_MS)
        );
        assert_eq!(settings.animation, Duration::from_millis(MAX_ANIMATION_MS));
    }

    #[test]
    fn default_chrome_settings_use_defaults() {
        let settings = ChromeSettings::default();
        assert_eq!(settings.toolbar_height, DEFAULT_TOOLBAR_HEIGHT);
        assert_eq!(settings.strip_height, DEFAULT_STRIP_HEIGHT);
        assert_eq!(
            settings.poll_interval,
            Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
        );
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join("settings.toml"),
            "[general]\nlanguage = \"de\"\ntheme_mode = \"dark\"\n",
        )
        .expect("write config");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("caption-config-error"));
        assert_eq!(config, Config::default());
    }
}
