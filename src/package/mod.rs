//! The unpacked package under test: its path list and the text of the files
//! content rules need.

mod contents;

pub use contents::PackageContents;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LOCAL_CONFIG_NAME;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    root: PathBuf,
    /// Package-relative paths with `/` separators, sorted.
    files: Vec<String>,
}

impl Package {
    /// Collect every regular file below `root`.
    ///
    /// The package's own `.pkg-guard.toml` is left out.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be walked.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let relative = to_package_path(relative);
            if relative == LOCAL_CONFIG_NAME {
                continue;
            }
            files.push(relative);
        }
        tracing::debug!(root = %root.display(), files = files.len(), "scanned package");

        Ok(Self::from_paths(root, files))
    }

    /// Build a package from an already enumerated path list.
    #[must_use]
    pub fn from_paths<S: Into<String>>(root: impl Into<PathBuf>, files: Vec<S>) -> Self {
        let mut files: Vec<String> = files
            .into_iter()
            .map(|f| f.into().replace('\\', "/"))
            .collect();
        files.sort();
        Self {
            root: root.into(),
            files,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files whose extension equals `ext`, ignoring case.
    pub fn files_with_extension<'a>(&'a self, ext: &'a str) -> impl Iterator<Item = &'a str> {
        self.files.iter().map(String::as_str).filter(move |f| {
            Path::new(f)
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(ext))
        })
    }
}

fn to_package_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lowercased final segment of a package path.
#[must_use]
pub fn basename_lower(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_lowercase()
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;
