use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkgGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk package directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regex in rule '{rule}': {pattern}")]
    InvalidRegex {
        rule: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate rule identifier: {0}")]
    DuplicateRule(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PkgGuardError {
    /// Short machine-readable name of the error variant.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Walk(_) => "Walk",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::InvalidRegex { .. } => "InvalidRegex",
            Self::DuplicateRule(_) => "DuplicateRule",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, PkgGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
