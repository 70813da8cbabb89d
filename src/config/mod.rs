//! Configuration module for fdcalc
//!
//! This module handles:
//! - User configuration (~/.config/fdcalc/config.toml)
//! - Default deposit parameters
//! - Display preferences (theme, output format, share link base)

mod theme;
mod user_config;

pub use theme::{system_prefers_dark, ParseThemeError, Theme};
pub use user_config::{DisplayConfig, UserConfig, DEFAULT_BASE_URL};
