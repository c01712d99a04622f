//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, GALLERY_FALLBACK_IMAGE, PREVIEW_FALLBACK_IMAGE,
};
use crate::models::View;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses "auto", "dark", or "light" (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Lowercase name as accepted by [`ThemeMode::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// View shown when the application starts
    #[serde(default)]
    pub start_view: View,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            start_view: View::Customize,
        }
    }
}

/// Image reference settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Image shown in the preview area when the real one is missing or fails to load
    #[serde(default = "default_preview_fallback")]
    pub preview_fallback: String,
    /// Image shown on gallery cards when the real one fails to load
    #[serde(default = "default_gallery_fallback")]
    pub gallery_fallback: String,
    /// Prefix joined onto relative catalog image paths (e.g., a CDN URL)
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_preview_fallback() -> String {
    PREVIEW_FALLBACK_IMAGE.to_string()
}

fn default_gallery_fallback() -> String {
    GALLERY_FALLBACK_IMAGE.to_string()
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            preview_fallback: default_preview_fallback(),
            gallery_fallback: default_gallery_fallback(),
            base_url: None,
        }
    }
}

impl ImageConfig {
    /// Turns a catalog image path into the reference handed to the renderer.
    ///
    /// Absolute URLs and rooted paths pass through unchanged; relative paths
    /// are joined onto `base_url` when one is configured.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> String {
        let is_absolute = reference.starts_with('/') || reference.contains("://");
        match &self.base_url {
            Some(base) if !is_absolute => {
                format!("{}/{}", base.trim_end_matches('/'), reference)
            }
            _ => reference.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/DuckAttire/config.toml`
/// - macOS: `~/Library/Application Support/DuckAttire/config.toml`
/// - Windows: `%APPDATA%\DuckAttire\config.toml`
///
/// The directory can be overridden with the `DUCK_ATTIRE_CONFIG_DIR`
/// environment variable.
///
/// # Validation
///
/// - both fallback images must be non-empty
/// - `base_url`, when set, must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Image settings
    #[serde(default)]
    pub images: ImageConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "configuration saved");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.images.preview_fallback.trim().is_empty() {
            anyhow::bail!("images.preview_fallback cannot be empty");
        }
        if self.images.gallery_fallback.trim().is_empty() {
            anyhow::bail!("images.gallery_fallback cannot be empty");
        }
        if let Some(base) = &self.images.base_url {
            if base.trim().is_empty() {
                anyhow::bail!("images.base_url cannot be empty when set");
            }
        }
        Ok(())
    }
}
