//! Text (terminal) reporter with theme-aware colors

use super::format::{format_inr, format_percent};
use super::{CalculationReport, RenderOptions};
use crate::config::Theme;
use anyhow::Result;
use console::Style;

/// Accent styles for one theme. Dark terminals get the bright variants.
struct Palette {
    heading: Style,
    maturity: Style,
    interest: Style,
    principal: Style,
    dim: Style,
    link: Style,
}

impl Palette {
    fn new(theme: Theme, color: bool) -> Self {
        let tint = |style: Style| {
            let style = if theme.is_dark() { style.bright() } else { style };
            style.force_styling(color)
        };
        Self {
            heading: tint(Style::new().bold()),
            maturity: tint(Style::new().green().bold()),
            interest: tint(Style::new().magenta()),
            principal: tint(Style::new().blue()),
            dim: Style::new().dim().force_styling(color),
            link: tint(Style::new().cyan().underlined()),
        }
    }
}

/// Render report as formatted terminal output
pub fn render(report: &CalculationReport, options: RenderOptions) -> Result<String> {
    let p = Palette::new(options.theme, options.color);
    let input = &report.input;
    let result = &report.result;
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", p.heading.apply_to("Fixed Deposit Calculator")));
    out.push_str(&format!(
        "{}\n",
        p.dim.apply_to("──────────────────────────────────────")
    ));

    out.push_str(&format!(
        "Maturity Amount   {}\n",
        p.maturity.apply_to(format_inr(result.maturity_amount))
    ));
    out.push_str(&format!(
        "Interest Earned   {}  {}\n",
        p.interest.apply_to(format_inr(result.interest_earned)),
        p.dim.apply_to(format!(
            "Effective Rate: {} per annum",
            format_percent(result.effective_rate)
        ))
    ));
    out.push_str(&format!(
        "Principal         {}\n\n",
        p.principal.apply_to(format_inr(result.principal))
    ));

    out.push_str(&format!("{}\n", p.heading.apply_to("INVESTMENT SUMMARY")));
    out.push_str(&format!(
        "  Tenure        {} {}\n",
        input.tenure_value, input.tenure_unit
    ));
    out.push_str(&format!("  Rate          {}% p.a.\n", input.annual_rate_percent));
    out.push_str(&format!("  Compounding   {}\n", input.compounding.label()));
    out.push_str(&format!(
        "  Growth        {}\n",
        format_percent(result.growth_percent)
    ));

    if options.explain {
        out.push('\n');
        out.push_str(&explain(report, &p));
    }

    out.push_str(&format!("\nShare: {}\n", p.link.apply_to(&report.share_url)));
    Ok(out)
}

/// Formula breakdown with the actual numbers substituted
fn explain(report: &CalculationReport, p: &Palette) -> String {
    let input = &report.input;
    let n = input.compounding.periods_per_year();
    let r = input.annual_rate_percent / 100.0;
    let t = report.result.total_tenure_years;
    let mut out = String::new();

    out.push_str(&format!("{}\n", p.heading.apply_to("HOW IT IS CALCULATED")));
    out.push_str("  A = P(1 + r/n)^(nt)\n");
    out.push_str(&format!("  P = {}  principal\n", input.principal));
    out.push_str(&format!("  r = {}  annual rate\n", r));
    out.push_str(&format!("  n = {}  {} compounding\n", n, input.compounding.label()));
    out.push_str(&format!("  t = {}  years\n", t));
    out.push_str(&format!(
        "  A = {} x (1 + {}/{})^({} x {}) = {:.2}\n",
        input.principal, r, n, n, t, report.result.maturity_amount
    ));
    out
}
