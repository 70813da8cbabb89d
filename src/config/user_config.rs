//! User-level configuration for fdcalc
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/fdcalc/config.toml (or an explicit path)

use super::theme::Theme;
use crate::models::{Compounding, DepositInput, PartialDepositInput, TenureUnit};
use crate::reporters::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

/// Base used for share links when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserConfig {
    /// Deposit parameters used when a flag or link does not supply one
    #[serde(default)]
    pub defaults: PartialDepositInput,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Saved theme preference; absent means follow the terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    /// Default output format: text, json, markdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Base URL for share links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. Config file at `path`, or the user config path when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::user_config_path(),
        };

        let mut config = UserConfig::default();
        if let Some(path) = path.filter(|p| p.exists()) {
            match Self::read_file(&path) {
                Ok(file_config) => {
                    debug!("Loaded config from {}", path.display());
                    config.merge(file_config);
                }
                Err(e) => warn!("Ignoring config {}: {:#}", path.display(), e),
            }
        }

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parse a config file, failing on unreadable or invalid TOML
    pub fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
    }

    /// Write the config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fdcalc").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the user config path
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => Self::user_config_path()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory")),
        }
    }

    /// Environment overrides. `lookup` is injected so tests need not
    /// touch the process environment.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup("FDCALC_THEME") {
            match raw.parse::<Theme>() {
                Ok(theme) => self.display.theme = Some(theme),
                Err(e) => warn!("Ignoring FDCALC_THEME: {}", e),
            }
        }
        if let Some(url) = lookup("FDCALC_BASE_URL").filter(|u| !u.is_empty()) {
            self.display.base_url = Some(url);
        }
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        self.defaults = self.defaults.overlay(other.defaults);
        if other.display.theme.is_some() {
            self.display.theme = other.display.theme;
        }
        if other.display.format.is_some() {
            self.display.format = other.display.format;
        }
        if other.display.base_url.is_some() {
            self.display.base_url = other.display.base_url;
        }
    }

    /// Configured defaults filled in from the built-in default deposit
    pub fn default_input(&self) -> DepositInput {
        self.defaults.merge_onto(DepositInput::default())
    }

    /// Effective theme given what the terminal reports
    pub fn theme(&self, system_prefers_dark: bool) -> Theme {
        Theme::resolve(self.display.theme, system_prefers_dark)
    }

    pub fn base_url(&self) -> &str {
        self.display.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn format(&self) -> &str {
        self.display.format.as_deref().unwrap_or("text")
    }

    /// Set a dotted key, validating the value for its type
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.principal" => self.defaults.principal = Some(parse_number(key, value)?),
            "defaults.rate" => self.defaults.annual_rate_percent = Some(parse_number(key, value)?),
            "defaults.tenure" => self.defaults.tenure_value = Some(parse_number(key, value)?),
            "defaults.tenure_unit" => {
                self.defaults.tenure_unit = Some(value.parse::<TenureUnit>()?)
            }
            "defaults.compounding" => {
                self.defaults.compounding = Some(value.parse::<Compounding>()?)
            }
            "display.theme" => self.display.theme = Some(value.parse::<Theme>()?),
            "display.format" => {
                value.parse::<OutputFormat>()?;
                self.display.format = Some(value.to_lowercase());
            }
            "display.base_url" => {
                Url::parse(value)
                    .with_context(|| format!("Invalid value for {}: '{}'", key, value))?;
                self.display.base_url = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                Self::KEYS.join(", ")
            ),
        }
        Ok(())
    }

    pub const KEYS: [&'static str; 8] = [
        "defaults.principal",
        "defaults.rate",
        "defaults.tenure",
        "defaults.tenure_unit",
        "defaults.compounding",
        "display.theme",
        "display.format",
        "display.base_url",
    ];

    /// Create an example config at `path` unless one exists
    pub fn init_user_config(path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            let example = r#"# fdcalc User Configuration

[defaults]
# Used when neither a flag nor a link supplies the value
# principal = 100000.0
# rate = 7.5
# tenure = 5.0
# tenure_unit = "years"         # years | months
# compounding = "quarterly"     # monthly | quarterly | half-yearly | yearly

[display]
# theme = "dark"                # light | dark (unset = follow terminal)
# format = "text"               # text | json | markdown
# base_url = "http://localhost:5173/"
"#;
            std::fs::write(path, example)?;
        }

        Ok(path.to_path_buf())
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64> {
    let n: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid number for {}", value, key))?;
    if !n.is_finite() {
        anyhow::bail!("{} must be a finite number", key);
    }
    Ok(n)
}
