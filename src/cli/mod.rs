//! CLI command definitions and handlers

mod calc;
mod share;
mod theme;

use crate::codec::decode_url;
use crate::config::UserConfig;
use crate::models::{Compounding, DepositInput, PartialDepositInput, TenureUnit};
use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

/// fdcalc - Fixed deposit maturity calculator
#[derive(Parser, Debug)]
#[command(name = "fdcalc")]
#[command(
    version,
    about = "Fixed deposit calculator: maturity amount, interest earned and shareable links",
    long_about = "Computes the maturity of a fixed deposit with the compound interest \
formula A = P(1 + r/n)^(nt).\n\n\
Run without a subcommand to calculate with your configured defaults:\n  \
fdcalc",
    after_help = "\
Examples:
  fdcalc calc --principal 50000 --rate 6 --tenure 18 --tenure-unit months
  fdcalc calc --from-url 'http://localhost:5173/?principal=250000&rate=7.1'
  fdcalc calc --format json                  JSON output for scripting
  fdcalc calc --format markdown -o fd.md     Markdown summary to a file
  fdcalc share --rate 7.25                   Print a shareable link
  fdcalc theme toggle                        Switch between light and dark"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ~/.config/fdcalc/config.toml)
    #[arg(long, global = true, env = "FDCALC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate maturity amount, interest and effective rate
    #[command(after_help = "\
Input precedence: flags > --from-url > config defaults > built-in defaults
(100000 at 7.5% for 5 years, compounded quarterly).")]
    Calc {
        #[command(flatten)]
        deposit: DepositArgs,

        /// Output format: text, json, markdown (or md). Default from config, else text
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Show the formula with the numbers substituted
        #[arg(long)]
        explain: bool,

        /// Compute even for zero/negative amounts (results may be NaN or infinite)
        #[arg(long)]
        no_validate: bool,

        /// Override the theme for this run
        #[arg(long, value_parser = ["light", "dark"])]
        theme: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print a shareable link for a calculation
    Share {
        #[command(flatten)]
        deposit: DepositArgs,

        /// Base URL of the calculator page (default from config)
        #[arg(long)]
        base_url: Option<String>,

        /// Print only the link, without the summary line
        #[arg(long)]
        url_only: bool,
    },

    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Manage the user configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ThemeAction {
    /// Show the effective theme and where it comes from
    Show,
    /// Switch between light and dark and save the choice
    Toggle,
    /// Save a theme preference
    Set {
        #[arg(value_parser = ["light", "dark"])]
        theme: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Create an example config file
    Init,
    /// Show config path and effective values
    Show,
    /// Set a value, e.g. `fdcalc config set defaults.rate 7.1`
    Set { key: String, value: String },
}

/// Deposit parameters shared by `calc` and `share`
#[derive(Args, Debug, Default, Clone)]
pub struct DepositArgs {
    /// Deposit amount
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    pub principal: Option<f64>,

    /// Annual interest rate in percent (7.5 means 7.5%)
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Tenure, in --tenure-unit
    #[arg(long, short = 't', allow_negative_numbers = true)]
    pub tenure: Option<f64>,

    /// Unit of --tenure
    #[arg(long, value_parser = PossibleValuesParser::new(TenureUnit::ALL.map(|u| u.as_str())))]
    pub tenure_unit: Option<String>,

    /// Compounding frequency
    #[arg(long, value_parser = PossibleValuesParser::new(Compounding::ALL.map(|c| c.as_str())))]
    pub compounding: Option<String>,

    /// Start from a shareable link or query string
    #[arg(long, value_name = "URL")]
    pub from_url: Option<String>,
}

impl DepositArgs {
    fn flags(&self) -> Result<PartialDepositInput> {
        Ok(PartialDepositInput {
            principal: self.principal,
            annual_rate_percent: self.rate,
            tenure_value: self.tenure,
            tenure_unit: self
                .tenure_unit
                .as_deref()
                .map(str::parse::<TenureUnit>)
                .transpose()?,
            compounding: self
                .compounding
                .as_deref()
                .map(str::parse::<Compounding>)
                .transpose()?,
        })
    }

    /// Flags over link over configured defaults
    pub fn resolve(&self, config: &UserConfig) -> Result<DepositInput> {
        let mut partial = PartialDepositInput::default();
        if let Some(url) = &self.from_url {
            let decoded = decode_url(url);
            debug!("Decoded {} field(s) from link", decoded.len());
            partial = partial.overlay(decoded);
        }
        partial = partial.overlay(self.flags()?);
        Ok(partial.merge_onto(config.default_input()))
    }
}

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Some(Commands::Calc {
            deposit,
            format,
            output,
            explain,
            no_validate,
            theme,
            no_color,
        }) => calc::run(
            config_path,
            &deposit,
            calc::CalcOptions {
                format,
                output,
                explain,
                validate: !no_validate,
                theme,
                color: !no_color,
            },
        ),

        Some(Commands::Share {
            deposit,
            base_url,
            url_only,
        }) => share::run(config_path, &deposit, base_url.as_deref(), url_only),

        Some(Commands::Theme { action }) => {
            theme::run(config_path, action.unwrap_or(ThemeAction::Show))
        }

        Some(Commands::Config { action }) => run_config_action(config_path, action),

        None => calc::run(
            config_path,
            &DepositArgs::default(),
            calc::CalcOptions::default(),
        ),
    }
}

/// Read the config file alone (no environment overrides), for editing
fn load_file_config(path: &Path) -> Result<UserConfig> {
    if path.exists() {
        UserConfig::read_file(path)
    } else {
        Ok(UserConfig::default())
    }
}

fn run_config_action(config_path: Option<&Path>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = UserConfig::resolve_path(config_path)?;
            let path = UserConfig::init_user_config(&path)?;
            println!("Config initialized at: {}", path.display());
            Ok(())
        }
        ConfigAction::Show => show_config(config_path),
        ConfigAction::Set { key, value } => set_config_value(config_path, &key, &value),
    }
}

fn set_config_value(config_path: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let path = UserConfig::resolve_path(config_path)?;
    let mut config = load_file_config(&path)
        .with_context(|| format!("Refusing to overwrite {}", path.display()))?;
    config.set_value(key, value)?;
    config.save(&path)?;
    println!("Set {} = {} in {}", key, value, path.display());
    Ok(())
}

fn show_config(config_path: Option<&Path>) -> Result<()> {
    let path = UserConfig::resolve_path(config_path)?;
    let status = if path.exists() { "" } else { " (not found)" };
    println!("Config: {}{}", path.display(), status);

    let config = UserConfig::load(Some(&path))?;
    let input = config.default_input();
    println!();
    println!("Defaults:");
    println!("  principal    {}", input.principal);
    println!("  rate         {}", input.annual_rate_percent);
    println!("  tenure       {} {}", input.tenure_value, input.tenure_unit);
    println!("  compounding  {}", input.compounding);
    println!();
    println!("Display:");
    let theme = match config.display.theme {
        Some(theme) => theme.to_string(),
        None => format!(
            "{} (terminal)",
            config.theme(crate::config::system_prefers_dark())
        ),
    };
    println!("  theme        {}", theme);
    println!("  format       {}", config.format());
    println!("  base_url     {}", config.base_url());
    Ok(())
}
