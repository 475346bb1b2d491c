use globset::Glob;

use crate::error::{Result, StngGuardError};

use super::Config;

/// Check semantic constraints serde cannot express.
///
/// # Errors
/// Returns a configuration error for empty or dotted extensions, an empty root,
/// and an invalid-pattern error for exclude globs that do not compile.
pub fn validate_config(config: &Config) -> Result<()> {
    let scanner = &config.scanner;

    if scanner.root.trim().is_empty() {
        return Err(StngGuardError::Config(
            "scanner.root must not be empty".to_string(),
        ));
    }

    if scanner.extensions.is_empty() {
        return Err(StngGuardError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }

    if let Some(ext) = scanner
        .extensions
        .iter()
        .find(|ext| ext.is_empty() || ext.starts_with('.'))
    {
        return Err(StngGuardError::Config(format!(
            "Invalid extension '{ext}': use the bare extension, e.g. \"tsx\""
        )));
    }

    for pattern in &scanner.exclude {
        Glob::new(pattern).map_err(|source| StngGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
