use indexmap::IndexMap;

use crate::error::{PkgGuardError, Result};

use super::Package;

/// Line arrays of the package files selected for content scanning.
#[derive(Debug, Default)]
pub struct PackageContents {
    lines: IndexMap<String, Vec<String>>,
}

impl PackageContents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every package file accepted by `select`.
    ///
    /// Files that are not valid UTF-8 are skipped with a warning; they cannot
    /// hold banned source text.
    ///
    /// # Errors
    /// Returns an error if a selected file cannot be read.
    pub fn load(package: &Package, select: impl Fn(&str) -> bool) -> Result<Self> {
        let mut contents = Self::new();
        for file in package.files().iter().filter(|f| select(f)) {
            let path = package.root().join(file);
            let bytes = std::fs::read(&path).map_err(|source| PkgGuardError::FileRead {
                path: path.clone(),
                source,
            })?;
            match String::from_utf8(bytes) {
                Ok(text) => contents.insert(file.clone(), split_lines(&text)),
                Err(_) => tracing::warn!(file = %file, "skipping non UTF-8 file"),
            }
        }
        Ok(contents)
    }

    pub fn insert(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.lines.insert(path.into(), lines);
    }

    #[must_use]
    pub fn lines(&self, path: &str) -> Option<&[String]> {
        self.lines.get(path).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text into lines without their terminators.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}
