use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, StngGuardError};

use super::{Config, validate_config};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".stng-guard.toml";

/// Where configuration text comes from.
pub trait ConfigSource {
    /// Contents of the file at `path`, or `None` when it does not exist.
    ///
    /// # Errors
    /// Any I/O failure other than the file being absent.
    fn read(&self, path: &Path) -> std::io::Result<Option<String>>;

    /// Directory searched for `.stng-guard.toml`.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined.
    fn working_dir(&self) -> std::io::Result<PathBuf>;
}

/// Reads configuration from disk relative to the process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskSource;

impl ConfigSource for DiskSource {
    fn read(&self, path: &Path) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn working_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads `.stng-guard.toml`, falling back to `Config::default()` when the
/// working directory has none.
#[derive(Debug)]
pub struct FileConfigLoader<S: ConfigSource = DiskSource> {
    source: S,
}

impl Default for FileConfigLoader<DiskSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<DiskSource> {
    #[must_use]
    pub const fn new() -> Self {
        Self { source: DiskSource }
    }
}

impl<S: ConfigSource> FileConfigLoader<S> {
    #[must_use]
    pub const fn with_source(source: S) -> Self {
        Self { source }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }

    fn read_config(&self, path: &Path) -> Result<Option<Config>> {
        let content = self
            .source
            .read(path)
            .map_err(|source| StngGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        content.as_deref().map(Self::parse_config).transpose()
    }
}

impl<S: ConfigSource> ConfigLoader for FileConfigLoader<S> {
    fn load(&self) -> Result<Config> {
        let Ok(dir) = self.source.working_dir() else {
            return Ok(Config::default());
        };
        Ok(self
            .read_config(&dir.join(LOCAL_CONFIG_NAME))?
            .unwrap_or_default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        self.read_config(path)?.ok_or_else(|| {
            StngGuardError::Config(format!("Config file not found: {}", path.display()))
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
