use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StngGuardError {
    #[error("Root directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl StngGuardError {
    /// Short category name used as the error headline on stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } => "Root not found",
            Self::Config(_) | Self::TomlParse(_) => "Configuration error",
            Self::FileRead { .. } | Self::Io(_) => "IO error",
            Self::InvalidPattern { .. } => "Invalid pattern",
            Self::JsonSerialize(_) => "Serialization error",
        }
    }

    /// Actionable hint for the user, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::RootNotFound { .. } => {
                Some("Pass the source directory as an argument or set scanner.root in .stng-guard.toml")
            }
            Self::InvalidPattern { .. } => Some("Check glob syntax in exclude patterns"),
            Self::TomlParse(_) => Some("Check the TOML syntax of the configuration file"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StngGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
