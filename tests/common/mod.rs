#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pkg-guard binary.
#[macro_export]
macro_rules! pkg_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pkg-guard"))
    };
}

/// A temporary unpacked package for integration tests.
pub struct TestPackage {
    pub dir: TempDir,
}

impl TestPackage {
    /// Creates an empty package directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a package that passes every built-in rule.
    pub fn valid() -> Self {
        let package = Self::new();
        package.create_file("license.txt", "GNU General Public License v2");
        package.create_file("install_mod.xml", "<mod/>");
        package.create_file("contrib/modx.prosilver.en.xsl", "<xsl:stylesheet/>");
        package
    }

    /// Creates a file with the given content in the package.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn remove_file(&self, relative_path: &str) {
        fs::remove_file(self.dir.path().join(relative_path)).expect("Failed to remove file");
    }

    /// Returns the path to the package root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> &str {
        self.dir.path().to_str().expect("Temp path is not UTF-8")
    }

    /// Writes the package's `.pkg-guard.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".pkg-guard.toml", content);
    }
}

pub const EVAL_RULE_CONFIG: &str = r#"
version = "1"

[[content.rules]]
id = "no_eval"
code = "USAGE_EVAL"
contains = "eval("
ignore = ["TODO"]
"#;

pub const EVAL_REGEX_CONFIG: &str = r#"
version = "1"

[[content.rules]]
id = "no_eval_anywhere"
code = "USAGE_EVAL"
severity = "warning"
regex = 'eval\s*\('
"#;
