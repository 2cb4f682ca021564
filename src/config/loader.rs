use std::path::Path;

use crate::error::{PkgGuardError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config;
use super::Config;

/// Name of the configuration file looked up in the package root.
pub const LOCAL_CONFIG_NAME: &str = ".pkg-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `.pkg-guard.toml` from the package root, or defaults if absent.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read, parsed or validated.
    fn load(&self, package_root: &Path) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(PkgGuardError::from)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, package_root: &Path) -> Result<Config> {
        let path = package_root.join(LOCAL_CONFIG_NAME);
        if !self.fs.exists(&path) {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| PkgGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::parse_config(&content)
    }
}
