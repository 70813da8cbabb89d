//! Markdown reporter
//!
//! GitHub-flavored Markdown: a results table, the investment summary and
//! the share link. Suitable for pasting into notes or issues.

use super::format::{format_inr, format_percent, share_text};
use super::{CalculationReport, RenderOptions};
use anyhow::Result;

/// Render report as Markdown
pub fn render(report: &CalculationReport, options: RenderOptions) -> Result<String> {
    let input = &report.input;
    let result = &report.result;
    let mut md = String::new();

    md.push_str("# Fixed Deposit Calculation\n\n");

    md.push_str("| | Amount |\n");
    md.push_str("|---|---:|\n");
    md.push_str(&format!(
        "| **Maturity Amount** | **{}** |\n",
        format_inr(result.maturity_amount)
    ));
    md.push_str(&format!(
        "| Interest Earned | {} |\n",
        format_inr(result.interest_earned)
    ));
    md.push_str(&format!("| Principal | {} |\n\n", format_inr(result.principal)));

    md.push_str("## Investment Summary\n\n");
    md.push_str(&format!(
        "- **Tenure:** {} {}\n",
        input.tenure_value, input.tenure_unit
    ));
    md.push_str(&format!(
        "- **Interest Rate:** {}% p.a.\n",
        input.annual_rate_percent
    ));
    md.push_str(&format!(
        "- **Compounding:** {}\n",
        input.compounding.label()
    ));
    md.push_str(&format!(
        "- **Effective Rate:** {} per annum\n",
        format_percent(result.effective_rate)
    ));
    md.push_str(&format!(
        "- **Growth:** {}\n\n",
        format_percent(result.growth_percent)
    ));

    if options.explain {
        md.push_str("## How It Is Calculated\n\n");
        md.push_str("`A = P(1 + r/n)^(nt)` where A is the maturity amount, P the principal, ");
        md.push_str("r the annual rate, n the compounding periods per year and t the tenure in years.\n\n");
        md.push_str(&format!(
            "`A = {} x (1 + {}/{})^({} x {}) = {:.2}`\n\n",
            input.principal,
            input.annual_rate_percent / 100.0,
            input.compounding.periods_per_year(),
            input.compounding.periods_per_year(),
            result.total_tenure_years,
            result.maturity_amount
        ));
    }

    md.push_str(&format!(
        "> {}\n>\n> [Open this calculation]({})\n",
        share_text(input, result),
        report.share_url
    ));
    Ok(md)
}
