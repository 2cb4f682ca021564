use std::fs;
use std::path::Path;

use crate::checks::check_package;
use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::package::Package;
use crate::runner::RunReport;
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURES, EXIT_SUCCESS, PkgGuardError, Result};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error_type = e.error_type(), "check aborted");
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validate the package at `args.path` and write the report.
///
/// # Errors
/// Returns an error if the configuration or package cannot be loaded, or the
/// report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    if !args.path.is_dir() {
        return Err(PkgGuardError::Config(format!(
            "Package directory not found: {}",
            args.path.display()
        )));
    }

    let config = load_config(&args.path, args.config.as_deref(), cli.no_config)?;
    let package = Package::scan(&args.path)?;
    let report = check_package(&package, &config)?;

    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if args.warn_only || !report.has_failures() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILURES)
    }
}

fn load_config(package_root: &Path, config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(
        || loader.load(package_root),
        |path| loader.load_from_path(path),
    )
}

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Render `report` in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_output(
    format: OutputFormat,
    report: &RunReport,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
