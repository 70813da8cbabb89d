//! Theme command - dark mode preference

use super::{load_file_config, ThemeAction};
use crate::config::{system_prefers_dark, Theme, UserConfig};
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run(config_path: Option<&Path>, action: ThemeAction) -> Result<()> {
    match action {
        ThemeAction::Show => {
            let config = UserConfig::load(config_path)?;
            let source = if config.display.theme.is_some() {
                "saved"
            } else {
                "terminal"
            };
            println!("{} ({})", config.theme(system_prefers_dark()), source);
            Ok(())
        }
        ThemeAction::Toggle => {
            let current = UserConfig::load(config_path)?.theme(system_prefers_dark());
            save_theme(config_path, current.toggled())
        }
        ThemeAction::Set { theme } => save_theme(config_path, theme.parse()?),
    }
}

fn save_theme(config_path: Option<&Path>, theme: Theme) -> Result<()> {
    let path = UserConfig::resolve_path(config_path)?;
    let mut config = load_file_config(&path)?;
    config.display.theme = Some(theme);
    config.save(&path)?;
    info!("Saved theme {} to {}", theme, path.display());
    println!("{}", theme);
    Ok(())
}
