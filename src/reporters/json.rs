//! JSON reporter
//!
//! Outputs the input, the result and the share link as pretty-printed
//! JSON. Non-finite numbers (zero tenure, zero principal) become `null`.

use super::CalculationReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &CalculationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
