//! Configuration semantic validation.
//!
//! Runs after parsing: checks cross-field constraints and that every pattern
//! compiles, so rule construction later cannot fail on user input.

use globset::Glob;
use indexmap::IndexSet;
use regex::Regex;

use crate::checks::BUILTIN_RULE_IDS;
use crate::classifier::CommentSyntax;
use crate::error::{PkgGuardError, Result};

use super::model::{CONFIG_VERSION, Config, ContentRule};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the version is unsupported, comment markers are
/// half-specified, or a content rule is misconfigured.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_package_section(config)?;
    validate_comment_syntax("comments", &config.comments)?;
    validate_content_rules(config)
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(PkgGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_package_section(config: &Config) -> Result<()> {
    if config.package.stylesheet_extension.trim().is_empty() {
        return Err(PkgGuardError::Config(
            "package.stylesheet_extension must not be empty".to_string(),
        ));
    }
    if config.package.license_file.trim().is_empty() {
        return Err(PkgGuardError::Config(
            "package.license_file must not be empty".to_string(),
        ));
    }
    if config.package.unwanted.iter().any(|n| n.is_empty()) {
        return Err(PkgGuardError::Config(
            "package.unwanted must not contain empty names".to_string(),
        ));
    }
    Ok(())
}

fn validate_comment_syntax(section: &str, syntax: &CommentSyntax) -> Result<()> {
    if syntax.block_start.is_empty() != syntax.block_end.is_empty() {
        return Err(PkgGuardError::Config(format!(
            "{section}: block_start and block_end must both be set or both be empty"
        )));
    }
    Ok(())
}

fn validate_content_rules(config: &Config) -> Result<()> {
    let mut seen = IndexSet::new();
    for (i, rule) in config.content.rules.iter().enumerate() {
        let section = format!("content.rules[{i}]");
        if rule.id.trim().is_empty() || rule.code.trim().is_empty() {
            return Err(PkgGuardError::Config(format!(
                "{section}: id and code must not be empty"
            )));
        }
        if BUILTIN_RULE_IDS.contains(&rule.id.as_str()) || !seen.insert(rule.id.as_str()) {
            return Err(PkgGuardError::DuplicateRule(rule.id.clone()));
        }
        validate_predicate(&section, rule)?;
        validate_files(&section, rule)?;
        if let Some(syntax) = &rule.comments {
            validate_comment_syntax(&section, syntax)?;
        }
    }
    Ok(())
}

fn validate_predicate(section: &str, rule: &ContentRule) -> Result<()> {
    match (&rule.contains, &rule.regex) {
        (Some(needle), None) if needle.is_empty() => Err(PkgGuardError::Config(format!(
            "{section}: contains must not be empty"
        ))),
        (Some(_), None) => Ok(()),
        (None, Some(pattern)) => Regex::new(pattern)
            .map(|_| ())
            .map_err(|source| PkgGuardError::InvalidRegex {
                rule: rule.id.clone(),
                pattern: pattern.clone(),
                source,
            }),
        _ => Err(PkgGuardError::Config(format!(
            "{section}: exactly one of contains or regex must be set"
        ))),
    }
}

fn validate_files(section: &str, rule: &ContentRule) -> Result<()> {
    if rule.files.is_empty() {
        return Err(PkgGuardError::Config(format!(
            "{section}: files must list at least one glob pattern"
        )));
    }
    for pattern in &rule.files {
        Glob::new(pattern).map_err(|source| PkgGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}
