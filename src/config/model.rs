use serde::{Deserialize, Serialize};

use crate::classifier::CommentSyntax;
use crate::violation::Severity;

use super::ignore_list;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Names reported as unwanted when they appear as a path segment.
pub const DEFAULT_UNWANTED: &[&str] = &["__macosx", ".ds_store", "thumbs.db", ".svn"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub package: PackageConfig,

    /// Default comment markers for content rules.
    #[serde(default)]
    pub comments: CommentSyntax,

    #[serde(default)]
    pub content: ContentConfig,
}

/// Settings for the built-in packaging rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageConfig {
    /// Extension of the stylesheet the package must ship (without the dot).
    #[serde(default = "default_stylesheet_extension")]
    pub stylesheet_extension: String,

    /// Basename of the required license file, compared case-insensitively.
    #[serde(default = "default_license_file")]
    pub license_file: String,

    /// File and directory names that should never be shipped.
    #[serde(default = "default_unwanted")]
    pub unwanted: Vec<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            stylesheet_extension: default_stylesheet_extension(),
            license_file: default_license_file(),
            unwanted: default_unwanted(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentConfig {
    /// Line-scanning rules [[content.rules]], run after the packaging rules.
    #[serde(default)]
    pub rules: Vec<ContentRule>,
}

/// A banned substring or pattern, scanned for in every matching package file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRule {
    /// Rule identifier reported in the failed-test list.
    pub id: String,

    /// Message code pushed for every matching line.
    pub code: String,

    #[serde(default = "default_severity")]
    pub severity: Severity,

    /// Substring to look for in comment-stripped code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,

    /// Regex tested against the raw line (comments and `ignore` are not applied).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    /// Lines whose code contains any of these are skipped.
    /// Accepts a single string or a list; any other shape means no entries.
    #[serde(
        default,
        deserialize_with = "ignore_list::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ignore: Vec<String>,

    /// Glob patterns (relative to the package root) selecting files to scan.
    #[serde(default = "default_rule_files")]
    pub files: Vec<String>,

    /// Per-rule comment markers, overriding `[comments]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<CommentSyntax>,
}

fn default_stylesheet_extension() -> String {
    "xsl".to_string()
}

fn default_license_file() -> String {
    "license.txt".to_string()
}

fn default_unwanted() -> Vec<String> {
    DEFAULT_UNWANTED.iter().map(|s| (*s).to_string()).collect()
}

const fn default_severity() -> Severity {
    Severity::Fail
}

fn default_rule_files() -> Vec<String> {
    vec!["**/*.php".to_string()]
}
