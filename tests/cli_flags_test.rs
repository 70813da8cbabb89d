//! CLI flag contract tests
//!
//! Runs the built binary against a throwaway config file and checks the
//! visible behaviour of calc, share, theme and config.

use std::path::Path;
use std::process::Command;

fn fdcalc_bin() -> String {
    env!("CARGO_BIN_EXE_fdcalc").to_string()
}

fn run(config: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(fdcalc_bin())
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("FDCALC_THEME")
        .env_remove("FDCALC_BASE_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run fdcalc");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

fn config_in(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("config.toml")
}

fn calc_json(config: &Path, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["calc", "--format", "json"];
    args.extend_from_slice(extra);
    let (code, stdout, stderr) = run(config, &args);
    assert_eq!(code, 0, "calc failed: {}", stderr);
    serde_json::from_str(&stdout).expect("Invalid JSON")
}

// ============================================================================
// calc
// ============================================================================

#[test]
fn test_calc_defaults_json() {
    let dir = tempfile::tempdir().unwrap();
    let v = calc_json(&config_in(&dir), &[]);
    assert_eq!(v["result"]["maturity_amount"], 144994.8);
    assert_eq!(v["result"]["interest_earned"], 44994.8);
    assert_eq!(v["result"]["effective_rate"], 9.0);
    assert_eq!(v["result"]["growth_percent"], 44.99);
}

#[test]
fn test_calc_eighteen_months_monthly() {
    let dir = tempfile::tempdir().unwrap();
    let v = calc_json(
        &config_in(&dir),
        &[
            "--principal",
            "50000",
            "--rate",
            "6",
            "--tenure",
            "18",
            "--tenure-unit",
            "months",
            "--compounding",
            "monthly",
        ],
    );
    assert_eq!(v["result"]["maturity_amount"], 54696.45);
    assert_eq!(v["result"]["total_tenure_years"], 1.5);
}

#[test]
fn test_calc_from_url_with_flag_override() {
    let dir = tempfile::tempdir().unwrap();
    let v = calc_json(
        &config_in(&dir),
        &[
            "--from-url",
            "http://localhost:5173/?principal=50000&rate=abc&tenure=18&tenureUnit=months&compounding=monthly",
            "--rate",
            "6",
        ],
    );
    assert_eq!(v["input"]["principal"], 50000.0);
    assert_eq!(v["input"]["rate"], 6.0);
    assert_eq!(v["result"]["maturity_amount"], 54696.45);
}

#[test]
fn test_calc_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(&config_in(&dir), &["calc", "--no-color", "--explain"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Maturity Amount   ₹1,44,995"));
    assert!(stdout.contains("A = P(1 + r/n)^(nt)"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_no_subcommand_runs_calc() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(&config_in(&dir), &[]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Fixed Deposit Calculator"));
}

#[test]
fn test_calc_rejects_zero_tenure() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run(&config_in(&dir), &["calc", "--tenure", "0"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("tenure must be greater than zero"));
}

#[test]
fn test_calc_no_validate_computes_degenerate() {
    let dir = tempfile::tempdir().unwrap();
    let v = calc_json(&config_in(&dir), &["--tenure", "0", "--no-validate"]);
    assert_eq!(v["result"]["maturity_amount"], 100000.0);
    assert!(v["result"]["effective_rate"].is_null());
}

#[test]
fn test_calc_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fd.md");
    let (code, _, _) = run(
        &config_in(&dir),
        &["calc", "--format", "md", "-o", out.to_str().unwrap()],
    );
    assert_eq!(code, 0);
    let md = std::fs::read_to_string(&out).unwrap();
    assert!(md.starts_with("# Fixed Deposit Calculation"));
}

#[test]
fn test_invalid_compounding_flag_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run(&config_in(&dir), &["calc", "--compounding", "daily"]);
    assert_ne!(code, 0);
}

// ============================================================================
// share
// ============================================================================

#[test]
fn test_share_prints_link_and_text() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(
        &config_in(&dir),
        &["share", "--base-url", "https://fd.example/calc?x=1"],
    );
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Check out this FD calculation: ₹1,00,000 at 7.5% for 5 years = ₹1,44,995",
            "https://fd.example/calc?principal=100000&rate=7.5&tenure=5&tenureUnit=years&compounding=quarterly",
        ]
    );
}

#[test]
fn test_share_rejects_relative_base_url() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run(&config_in(&dir), &["share", "--base-url", "not a url"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid share base URL"), "{}", stderr);
}

#[test]
fn test_share_url_only_round_trips_through_calc() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let (_, link, _) = run(
        &config,
        &[
            "share",
            "--url-only",
            "--principal",
            "75000",
            "--compounding",
            "half-yearly",
        ],
    );
    let v = calc_json(&config, &["--from-url", link.trim()]);
    assert_eq!(v["input"]["principal"], 75000.0);
    assert_eq!(v["input"]["compounding"], "half-yearly");
}

// ============================================================================
// theme / config
// ============================================================================

#[test]
fn test_theme_set_and_toggle_persist() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let (code, stdout, _) = run(&config, &["theme", "set", "dark"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "dark");

    let (_, stdout, _) = run(&config, &["theme", "show"]);
    assert_eq!(stdout.trim(), "dark (saved)");

    let (_, stdout, _) = run(&config, &["theme", "toggle"]);
    assert_eq!(stdout.trim(), "light");

    let saved = std::fs::read_to_string(&config).unwrap();
    assert!(saved.contains("theme = \"light\""));
}

#[test]
fn test_config_defaults_feed_calc() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let (code, _, stderr) = run(&config, &["config", "set", "defaults.principal", "50000"]);
    assert_eq!(code, 0, "{}", stderr);
    run(&config, &["config", "set", "defaults.rate", "6"]);
    run(&config, &["config", "set", "defaults.tenure", "18"]);
    run(&config, &["config", "set", "defaults.tenure_unit", "months"]);
    run(&config, &["config", "set", "defaults.compounding", "monthly"]);

    let v = calc_json(&config, &[]);
    assert_eq!(v["result"]["maturity_amount"], 54696.45);
}

#[test]
fn test_config_set_theme_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let (code, _, stderr) = run(&config, &["config", "set", "display.theme", "Dark"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown theme 'Dark'"), "{}", stderr);
    assert!(!config.exists());
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let (code, _, stderr) = run(&config, &["config", "set", "ai.model", "x"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown config key"));
    assert!(!config.exists());
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let (code, _, _) = run(&config, &["config", "init"]);
    assert_eq!(code, 0);
    assert!(config.exists());

    let (code, stdout, _) = run(&config, &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("principal    100000"));
    assert!(stdout.contains("compounding  quarterly"));
}
