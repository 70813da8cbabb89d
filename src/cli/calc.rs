//! Calc command - compute and render a deposit

use super::DepositArgs;
use crate::config::{system_prefers_dark, Theme, UserConfig};
use crate::reporters::{self, CalculationReport, OutputFormat, RenderOptions};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct CalcOptions {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub explain: bool,
    pub validate: bool,
    pub theme: Option<String>,
    pub color: bool,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            format: None,
            output: None,
            explain: false,
            validate: true,
            theme: None,
            color: true,
        }
    }
}

/// Run the calc command
pub fn run(config_path: Option<&Path>, deposit: &DepositArgs, options: CalcOptions) -> Result<()> {
    let config = UserConfig::load(config_path)?;
    let input = deposit.resolve(&config)?;
    if options.validate {
        input.validate().context("Invalid deposit")?;
    }
    debug!(?input, "Resolved deposit input");

    let format: OutputFormat = options
        .format
        .as_deref()
        .unwrap_or_else(|| config.format())
        .parse()?;

    let theme = match options.theme.as_deref() {
        Some(name) => name.parse::<Theme>()?,
        None => config.theme(system_prefers_dark()),
    };

    let report = CalculationReport::new(input, config.base_url())?;
    info!(
        maturity = report.result.maturity_amount,
        interest = report.result.interest_earned,
        "Calculated maturity"
    );

    let render_options = RenderOptions {
        theme,
        color: options.color && options.output.is_none() && console::colors_enabled(),
        explain: options.explain,
    };
    let rendered = reporters::report_with_format(&report, format, render_options)?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
