use serde::{Deserialize, Serialize};

use crate::rules::DEFAULT_EXTENSIONS;

/// Directory scanned when neither the CLI nor the config names one.
pub const DEFAULT_ROOT: &str = "src";

/// Top-level `.stng-guard.toml` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Root directory to walk, relative to the working directory.
    #[serde(default = "default_root")]
    pub root: String,

    /// File extensions (without leading dot) that are checked.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: false)
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

/// Outcome policy settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Treat unreadable files as a failing condition (exit code 1).
    #[serde(default)]
    pub fail_on_unreadable: bool,
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
