use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "pkg-guard")]
#[command(author, version, about = "Package guard - validate package contents against packaging rules")]
#[command(long_about = "Validates an unpacked package against packaging and content rules.\n\n\
    Exit codes:\n  \
    0 - No failures (warnings and notices allowed)\n  \
    1 - At least one rule reported a failure\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check an unpacked package
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Root directory of the unpacked package
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file (defaults to .pkg-guard.toml in the package root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Always exit 0, even when failures are reported
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".pkg-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
