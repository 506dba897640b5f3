// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[site]` - Directory the page documents and images are read from
//! - `[news]` - Carousel rotation intervals
//! - `[lightbox]` - Which lightbox surfaces the page provides
//! - `[links]` - External social and contact links
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `PITCHSIDE_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pitchside::app::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("slides every {} ms", config.news.auto_rotate_ms());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::gallery::SurfaceLayout;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-AU", "fr").
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

/// Site content location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Root directory holding `data/` and `assets/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl SiteConfig {
    #[must_use]
    pub fn root_or_default(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR))
    }
}

/// News carousel timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsConfig {
    #[serde(
        default = "default_auto_rotate_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_rotate_ms: Option<u64>,

    #[serde(
        default = "default_image_rotate_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_rotate_ms: Option<u64>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            auto_rotate_ms: default_auto_rotate_ms(),
            image_rotate_ms: default_image_rotate_ms(),
        }
    }
}

impl NewsConfig {
    /// Slide interval, clamped to the supported range.
    #[must_use]
    pub fn auto_rotate_ms(&self) -> u64 {
        self.auto_rotate_ms
            .unwrap_or(DEFAULT_AUTO_ROTATE_MS)
            .clamp(MIN_AUTO_ROTATE_MS, MAX_AUTO_ROTATE_MS)
    }

    /// Image interval inside the active slide, clamped to the supported range.
    #[must_use]
    pub fn image_rotate_ms(&self) -> u64 {
        self.image_rotate_ms
            .unwrap_or(DEFAULT_IMAGE_ROTATE_MS)
            .clamp(MIN_IMAGE_ROTATE_MS, MAX_IMAGE_ROTATE_MS)
    }

    #[must_use]
    pub fn auto_rotate(&self) -> Duration {
        Duration::from_millis(self.auto_rotate_ms())
    }

    #[must_use]
    pub fn image_rotate(&self) -> Duration {
        Duration::from_millis(self.image_rotate_ms())
    }
}

/// Lightbox surfaces the page provides. All present by default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LightboxConfig {
    #[serde(default = "enabled")]
    pub root: bool,
    #[serde(default = "enabled")]
    pub backdrop: bool,
    #[serde(default = "enabled")]
    pub caption: bool,
    #[serde(default = "enabled")]
    pub controls: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            root: true,
            backdrop: true,
            caption: true,
            controls: true,
        }
    }
}

impl From<&LightboxConfig> for SurfaceLayout {
    fn from(config: &LightboxConfig) -> Self {
        SurfaceLayout {
            root: config.root,
            backdrop: config.backdrop,
            caption: config.caption,
            controls: config.controls,
        }
    }
}

/// External links shown in the page footer. Empty entries are hidden.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinksConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub news: NewsConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub links: LinksConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_auto_rotate_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_ROTATE_MS)
}

fn default_image_rotate_ms() -> Option<u64> {
    Some(DEFAULT_IMAGE_ROTATE_MS)
}

fn enabled() -> bool {
    true
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
                    warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("warning-config-load-error".to_string()),
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
// Tests
// =============================================================================
