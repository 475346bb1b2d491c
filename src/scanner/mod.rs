mod filter;

pub use filter::{FileFilter, MarkupFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StngGuardError};

/// An entry the walk could not visit; the rest of the walk continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// One step of a directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    File(PathBuf),
    Skipped(SkippedEntry),
}

/// All candidate files plus the entries skipped along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntry>,
}

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns `RootNotFound` if `root` is not an existing directory.
    fn scan(&self, root: &Path) -> Result<ScanResult>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    /// Lazily walk `root`, yielding candidate files in lexical order within
    /// each directory. Calling `walk` again restarts from the beginning.
    ///
    /// # Errors
    /// Returns `RootNotFound` before any traversal if `root` is not a directory.
    pub fn walk<'a>(&'a self, root: &Path) -> Result<Box<dyn Iterator<Item = WalkEntry> + 'a>> {
        if !root.is_dir() {
            return Err(StngGuardError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        if self.use_gitignore {
            Ok(self.walk_with_gitignore(root))
        } else {
            Ok(self.walk_without_gitignore(root))
        }
    }

    fn includes(&self, path: &Path, root: &Path) -> bool {
        self.filter
            .should_include(path.strip_prefix(root).unwrap_or(path))
    }

    fn walk_without_gitignore<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = WalkEntry> + 'a> {
        let root = root.to_path_buf();
        let walker = WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(e) => (e.file_type().is_file() && self.includes(e.path(), &root))
                    .then(|| WalkEntry::File(e.into_path())),
                Err(err) => Some(WalkEntry::Skipped(SkippedEntry {
                    path: err.path().map(Path::to_path_buf),
                    reason: err.to_string(),
                })),
            });
        Box::new(walker)
    }

    fn walk_with_gitignore<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = WalkEntry> + 'a> {
        use ignore::WalkBuilder;

        let root = root.to_path_buf();
        let walker = WalkBuilder::new(&root)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(move |entry| match entry {
                Ok(e) => (e.file_type().is_some_and(|ft| ft.is_file())
                    && self.includes(e.path(), &root))
                .then(|| WalkEntry::File(e.into_path())),
                Err(err) => Some(WalkEntry::Skipped(SkippedEntry {
                    path: None,
                    reason: err.to_string(),
                })),
            });
        Box::new(walker)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanResult> {
        let mut result = ScanResult::default();
        for entry in self.walk(root)? {
            match entry {
                WalkEntry::File(path) => result.files.push(path),
                WalkEntry::Skipped(skipped) => result.skipped.push(skipped),
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
