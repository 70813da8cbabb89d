//! Output reporters for fdcalc calculations
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with theme-aware colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod format;
mod json;
mod markdown;
mod text;

pub use format::{format_inr, format_percent, share_text};

use crate::calculator::compute_maturity;
use crate::codec::shareable_url;
use crate::config::Theme;
use crate::models::{DepositInput, DepositResult};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::str::FromStr;

/// A calculation together with everything needed to present it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    pub input: DepositInput,
    pub result: DepositResult,
    pub share_url: String,
}

impl CalculationReport {
    /// Fails only when `base_url` is not an absolute URL
    pub fn new(input: DepositInput, base_url: &str) -> Result<Self> {
        let share_url = shareable_url(base_url, &input)
            .with_context(|| format!("Invalid share base URL '{}'", base_url))?;
        Ok(Self {
            input,
            result: compute_maturity(&input),
            share_url,
        })
    }
}

/// Presentation switches that do not change the numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Emit ANSI styling (text format only)
    pub color: bool,
    /// Append the formula breakdown
    pub explain: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(
    report: &CalculationReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, options),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report, options),
    }
}
