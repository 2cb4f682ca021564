use std::fs;

use clap::Parser;
use tempfile::TempDir;

use crate::cli::{Cli, Commands};

use super::*;

fn parse(args: &[&str]) -> (Cli, CheckArgs) {
    let cli = Cli::try_parse_from(args).unwrap();
    let Commands::Check(check) = &cli.command else {
        panic!("Expected Check command");
    };
    let check = check.clone();
    (cli, check)
}

fn valid_package() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("license.txt"), "GPL").unwrap();
    fs::write(dir.path().join("modx.xsl"), "<xsl/>").unwrap();
    fs::write(dir.path().join("install.php"), "<?php\n// eval(\n").unwrap();
    dir
}

#[test]
fn clean_package_exits_success() {
    let dir = valid_package();
    let path = dir.path().to_str().unwrap();
    let (cli, args) = parse(&["pkg-guard", "-q", "check", path]);

    assert_eq!(run_check_impl(&args, &cli).unwrap(), EXIT_SUCCESS);
}

#[test]
fn failures_exit_with_failure_code() {
    let dir = valid_package();
    fs::remove_file(dir.path().join("license.txt")).unwrap();
    let path = dir.path().to_str().unwrap();
    let (cli, args) = parse(&["pkg-guard", "-q", "check", path]);

    assert_eq!(run_check_impl(&args, &cli).unwrap(), EXIT_FAILURES);
}

#[test]
fn warn_only_exits_success_on_failures() {
    let dir = valid_package();
    fs::remove_file(dir.path().join("license.txt")).unwrap();
    let path = dir.path().to_str().unwrap();
    let (cli, args) = parse(&["pkg-guard", "-q", "check", path, "--warn-only"]);

    assert_eq!(run_check_impl(&args, &cli).unwrap(), EXIT_SUCCESS);
}

#[test]
fn package_config_is_applied() {
    let dir = valid_package();
    fs::write(
        dir.path().join(".pkg-guard.toml"),
        "[[content.rules]]\nid = \"no_eval\"\ncode = \"USAGE_EVAL\"\nregex = 'eval\\('\n",
    )
    .unwrap();
    let path = dir.path().to_str().unwrap();
    let (cli, args) = parse(&["pkg-guard", "-q", "check", path]);

    assert_eq!(run_check_impl(&args, &cli).unwrap(), EXIT_FAILURES);

    let (cli, args) = parse(&["pkg-guard", "-q", "--no-config", "check", path]);
    assert_eq!(run_check_impl(&args, &cli).unwrap(), EXIT_SUCCESS);
}

#[test]
fn report_is_written_to_output_file() {
    let dir = valid_package();
    let out = TempDir::new().unwrap();
    let report_path = out.path().join("report.json");
    let path = dir.path().to_str().unwrap();
    let (cli, args) = parse(&[
        "pkg-guard",
        "check",
        path,
        "-f",
        "json",
        "-o",
        report_path.to_str().unwrap(),
    ]);

    run_check_impl(&args, &cli).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["failures"], 0);
}

#[test]
fn missing_package_directory_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let (cli, args) = parse(&["pkg-guard", "check", missing.to_str().unwrap()]);

    let err = run_check_impl(&args, &cli).unwrap_err();
    assert!(err.to_string().contains("Package directory not found"));
    assert_eq!(run_check(&args, &cli), EXIT_CONFIG_ERROR);
}

#[test]
fn format_output_selects_formatter() {
    let report = RunReport {
        failed_tests: Vec::new(),
        outcomes: Vec::new(),
        terminated: false,
        violations: Vec::new(),
    };

    let text = format_output(OutputFormat::Text, &report, ColorMode::Never, 0).unwrap();
    assert!(text.starts_with("Summary:"));

    let json = format_output(OutputFormat::Json, &report, ColorMode::Never, 0).unwrap();
    assert!(json.trim_start().starts_with('{'));
}
