// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Preview rotation and gallery viewer behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `FOLIO_LENS_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_lens::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.gallery.preview_interval_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::PreviewInterval;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Project gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Delay between two preview carousel advances, in milliseconds.
    #[serde(
        default = "default_preview_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_interval_ms: Option<u64>,

    /// Whether pressing the dimmed backdrop closes the gallery viewer.
    #[serde(
        default = "default_close_on_backdrop",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_on_backdrop: Option<bool>,

    /// Whether the preview of the project being viewed stops rotating.
    #[serde(
        default = "default_pause_preview_while_open",
        skip_serializing_if = "Option::is_none"
    )]
    pub pause_preview_while_open: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            preview_interval_ms: default_preview_interval_ms(),
            close_on_backdrop: default_close_on_backdrop(),
            pause_preview_while_open: default_pause_preview_while_open(),
        }
    }
}

impl GalleryConfig {
    /// Preview interval with out-of-range values clamped.
    #[must_use]
    pub fn preview_interval(&self) -> PreviewInterval {
        PreviewInterval::from_millis(
            self.preview_interval_ms
                .unwrap_or(DEFAULT_PREVIEW_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn close_on_backdrop(&self) -> bool {
        self.close_on_backdrop.unwrap_or(DEFAULT_CLOSE_ON_BACKDROP)
    }

    #[must_use]
    pub fn pause_preview_while_open(&self) -> bool {
        self.pause_preview_while_open
            .unwrap_or(DEFAULT_PAUSE_PREVIEW_WHILE_OPEN)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Project gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_preview_interval_ms() -> Option<u64> {
    Some(DEFAULT_PREVIEW_INTERVAL_MS)
}

fn default_close_on_backdrop() -> Option<bool> {
    Some(DEFAULT_CLOSE_ON_BACKDROP)
}

fn default_pause_preview_while_open() -> Option<bool> {
    Some(DEFAULT_PAUSE_PREVIEW_WHILE_OPEN)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                preview_interval_ms: Some(4500),
                close_on_backdrop: Some(false),
                pause_preview_while_open: Some(true),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not valid toml").expect("write failed");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write failed");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse failed");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn preview_interval_is_clamped() {
        let gallery = GalleryConfig {
            preview_interval_ms: Some(10),
            ..GalleryConfig::default()
        };
        assert_eq!(
            gallery.preview_interval().as_duration(),
            Duration::from_millis(MIN_PREVIEW_INTERVAL_MS)
        );

        let gallery = GalleryConfig {
            preview_interval_ms: None,
            ..GalleryConfig::default()
        };
        assert_eq!(
            gallery.preview_interval().as_duration(),
            Duration::from_millis(DEFAULT_PREVIEW_INTERVAL_MS)
        );
    }

    #[test]
    fn gallery_accessors_fall_back_to_defaults() {
        let gallery = GalleryConfig {
            preview_interval_ms: None,
            close_on_backdrop: None,
            pause_preview_while_open: None,
        };
        assert!(gallery.close_on_backdrop());
        assert!(!gallery.pause_preview_while_open());
    }

    #[test]
    fn load_with_override_reports_warning_for_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\n").expect("write failed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config::default();
        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save failed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
