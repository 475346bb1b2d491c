use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{Result, StngGuardError};
use crate::rules::DEFAULT_EXTENSIONS;

/// Decides whether a walked file is evaluated.
///
/// The scanner passes the entry path with the scan root stripped, so patterns
/// never see the directories above the root.
pub trait FileFilter {
    fn should_include(&self, relative: &Path) -> bool;
}

/// Selects markup sources by extension, minus root-relative exclude matches.
#[derive(Debug, Clone)]
pub struct MarkupFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl MarkupFilter {
    /// # Errors
    /// Returns `InvalidPattern` naming the first exclude glob that does not compile.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            extensions,
            excludes: compile_excludes(exclude_patterns)?,
        })
    }

    /// `.tsx` and `.jsx` files, nothing excluded.
    #[must_use]
    pub fn markup_only() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            excludes: GlobSet::empty(),
        }
    }

    fn is_markup(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

impl Default for MarkupFilter {
    fn default() -> Self {
        Self::markup_only()
    }
}

impl FileFilter for MarkupFilter {
    fn should_include(&self, relative: &Path) -> bool {
        self.is_markup(relative) && !self.excludes.is_match(relative)
    }
}

// `*` stops at `/`; only `**` crosses directories.
fn compile_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| StngGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| StngGuardError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
