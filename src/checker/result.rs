use std::path::{Path, PathBuf};

use super::{Finding, FindingKind};

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was read and every rule was evaluated.
    Checked {
        findings: Vec<Finding>,
        uses_import: bool,
    },
    /// The file could not be read; no rules were evaluated.
    Unreadable { reason: String },
}

/// Result of checking a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileResult {
    #[must_use]
    pub const fn checked(path: PathBuf, findings: Vec<Finding>, uses_import: bool) -> Self {
        Self {
            path,
            outcome: FileOutcome::Checked {
                findings,
                uses_import,
            },
        }
    }

    #[must_use]
    pub const fn unreadable(path: PathBuf, reason: String) -> Self {
        Self {
            path,
            outcome: FileOutcome::Unreadable { reason },
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Findings for this file; empty for compliant and unreadable files.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        match &self.outcome {
            FileOutcome::Checked { findings, .. } => findings,
            FileOutcome::Unreadable { .. } => &[],
        }
    }

    #[must_use]
    pub const fn uses_import(&self) -> bool {
        matches!(
            self.outcome,
            FileOutcome::Checked {
                uses_import: true,
                ..
            }
        )
    }

    #[must_use]
    pub fn is_compliant(&self) -> bool {
        matches!(&self.outcome, FileOutcome::Checked { findings, .. } if findings.is_empty())
    }

    #[must_use]
    pub const fn is_unreadable(&self) -> bool {
        matches!(self.outcome, FileOutcome::Unreadable { .. })
    }

    #[must_use]
    pub fn unreadable_reason(&self) -> Option<&str> {
        match &self.outcome {
            FileOutcome::Unreadable { reason } => Some(reason),
            FileOutcome::Checked { .. } => None,
        }
    }

    #[must_use]
    pub fn count_of(&self, kind: FindingKind) -> usize {
        self.findings().iter().filter(|f| f.kind == kind).count()
    }
}
