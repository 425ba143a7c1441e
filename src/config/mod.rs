// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[toast]` - Notification lifetime
//! - `[email]` - Email relay service identifiers and public key
//!
//! # Examples
//!
//! ```no_run
//! use iced_portfolio::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("th".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[email] public_key`.
pub const ENV_EMAIL_PUBLIC_KEY: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";

/// Environment variable overriding `[email] service_id`.
pub const ENV_EMAIL_SERVICE_ID: &str = "PORTFOLIO_EMAILJS_SERVICE_ID";

/// Environment variable overriding `[email] template_id`.
pub const ENV_EMAIL_TEMPLATE_ID: &str = "PORTFOLIO_EMAILJS_TEMPLATE_ID";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "th").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// How long a toast stays on screen, in milliseconds.
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Email relay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EmailConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    /// Public API key of the relay account. Usually supplied through
    /// `PORTFOLIO_EMAILJS_PUBLIC_KEY` rather than written to disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Fully resolved email relay settings, ready for the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: Option<String>,
    pub timeout: Duration,
}

impl EmailConfig {
    /// Resolves the section against process environment variables and defaults.
    #[must_use]
    pub fn resolve(&self) -> EmailSettings {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolves the section using `lookup` for environment overrides.
    ///
    /// Environment values win over the file; empty values are ignored.
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> EmailSettings {
        let env = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        EmailSettings {
            endpoint: self
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_EMAIL_ENDPOINT.to_string()),
            service_id: env(ENV_EMAIL_SERVICE_ID)
                .or_else(|| self.service_id.clone())
                .unwrap_or_else(|| DEFAULT_EMAIL_SERVICE_ID.to_string()),
            template_id: env(ENV_EMAIL_TEMPLATE_ID)
                .or_else(|| self.template_id.clone())
                .unwrap_or_else(|| DEFAULT_EMAIL_TEMPLATE_ID.to_string()),
            public_key: env(ENV_EMAIL_PUBLIC_KEY).or_else(|| self.public_key.clone()),
            timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_EMAIL_TIMEOUT_SECS)),
        }
    }
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
    pub toast: ToastConfig,

    #[serde(default)]
    pub email: EmailConfig,
}

impl Config {
    /// Returns the toast lifetime, clamped to the supported range.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        let ms = self
            .toast
            .duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
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
/// default config with the i18n key of a warning to show the user.
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
                    log::warn!("Failed to load {}: {}", path.display(), err);
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
