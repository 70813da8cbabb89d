//! Share command - print a link that reopens this calculation

use super::DepositArgs;
use crate::calculator::compute_maturity;
use crate::codec::shareable_url;
use crate::config::UserConfig;
use crate::reporters::share_text;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(
    config_path: Option<&Path>,
    deposit: &DepositArgs,
    base_url: Option<&str>,
    url_only: bool,
) -> Result<()> {
    let config = UserConfig::load(config_path)?;
    let input = deposit.resolve(&config)?;
    input.validate().context("Invalid deposit")?;

    let base = base_url.unwrap_or_else(|| config.base_url());
    let url = shareable_url(base, &input)
        .with_context(|| format!("Invalid share base URL '{}'", base))?;
    if !url_only {
        println!("{}", share_text(&input, &compute_maturity(&input)));
    }
    println!("{}", url);
    Ok(())
}
