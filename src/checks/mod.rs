//! The rule set: built-in packaging rules followed by configured content rules.

mod content;
mod packaging;
mod unwanted;

pub use content::{CompiledContentRule, ContentCheck};
pub use packaging::{LicenseRule, MainInstallFileRule, PackageFilesRule, StylesheetRule};
pub use unwanted::UnwantedRule;

use crate::config::Config;
use crate::error::Result;
use crate::package::{Package, PackageContents};
use crate::runner::{RunReport, Runner};

/// Message codes pushed by the built-in rules.
pub mod codes {
    pub const NO_FILES: &str = "NO_FILES";
    pub const NO_XSL_FILE: &str = "NO_XSL_FILE";
    pub const NO_LICENSE: &str = "NO_LICENSE";
    pub const PROSILVER_NO_MAIN_MODX: &str = "PROSILVER_NO_MAIN_MODX";
    pub const ENGLISH_NO_MAIN_MODX: &str = "ENGLISH_NO_MAIN_MODX";
    pub const UNWANTED_FILE: &str = "UNWANTED_FILE";
}

/// Built-in rule ids, in execution order.
pub const BUILTIN_RULE_IDS: &[&str] = &[
    PackageFilesRule::ID,
    StylesheetRule::ID,
    LicenseRule::ID,
    MainInstallFileRule::ID,
    UnwantedRule::ID,
];

/// Register the built-in packaging rules.
///
/// # Errors
/// Returns an error if a rule id is already registered or the unwanted-name
/// matcher cannot be built.
pub fn register_builtin_rules<'a>(
    runner: &mut Runner<'a>,
    package: &'a Package,
    config: &'a Config,
) -> Result<()> {
    let settings = &config.package;
    runner.register(PackageFilesRule::new(package))?;
    runner.register(StylesheetRule::new(package, &settings.stylesheet_extension))?;
    runner.register(LicenseRule::new(package, &settings.license_file))?;
    runner.register(MainInstallFileRule::new(package))?;
    runner.register(UnwantedRule::new(package, &settings.unwanted)?)?;
    Ok(())
}

/// Register one content check per compiled rule, in configuration order.
///
/// # Errors
/// Returns an error if a rule id is already registered.
pub fn register_content_rules<'a>(
    runner: &mut Runner<'a>,
    rules: &'a [CompiledContentRule],
    package: &'a Package,
    contents: &'a PackageContents,
) -> Result<()> {
    for rule in rules {
        runner.register(ContentCheck::new(rule, package, contents))?;
    }
    Ok(())
}

/// Compile every `[[content.rules]]` entry of `config`.
///
/// # Errors
/// Returns an error if a regex or glob pattern does not compile.
pub fn compile_content_rules(config: &Config) -> Result<Vec<CompiledContentRule>> {
    config
        .content
        .rules
        .iter()
        .map(|rule| CompiledContentRule::compile(rule, &config.comments))
        .collect()
}

/// Run the whole rule set against `package`.
///
/// # Errors
/// Returns an error if the configuration cannot be compiled or a file
/// selected by a content rule cannot be read.
pub fn check_package(package: &Package, config: &Config) -> Result<RunReport> {
    let content_rules = compile_content_rules(config)?;
    let contents = PackageContents::load(package, |path| {
        content_rules.iter().any(|rule| rule.selects(path))
    })?;

    let mut runner = Runner::new();
    register_builtin_rules(&mut runner, package, config)?;
    register_content_rules(&mut runner, &content_rules, package, &contents)?;
    tracing::info!(rules = runner.rule_ids().len(), files = package.files().len(), "running checks");

    runner.run();
    Ok(runner.into_report())
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
