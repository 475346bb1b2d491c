use indexmap::IndexMap;
use serde::Serialize;

use super::{FileResult, FindingKind};

/// Project-wide counters accumulated as file results arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub files_checked: usize,
    pub files_using_import: usize,
    pub total_findings: usize,
    pub files_failed: usize,
    pub files_unreadable: usize,
    /// Findings per kind, in `FindingKind::all()` order.
    pub by_kind: IndexMap<FindingKind, usize>,
}

impl Default for ComplianceSummary {
    fn default() -> Self {
        Self {
            files_checked: 0,
            files_using_import: 0,
            total_findings: 0,
            files_failed: 0,
            files_unreadable: 0,
            by_kind: FindingKind::all().into_iter().map(|k| (k, 0)).collect(),
        }
    }
}

impl ComplianceSummary {
    #[must_use]
    pub fn from_results(results: &[FileResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result);
        }
        summary
    }

    /// Fold one completed file into the counters.
    pub fn record(&mut self, result: &FileResult) {
        self.files_checked += 1;

        if result.is_unreadable() {
            self.files_unreadable += 1;
            return;
        }

        if result.uses_import() {
            self.files_using_import += 1;
        }

        let findings = result.findings();
        if !findings.is_empty() {
            self.files_failed += 1;
        }
        self.total_findings += findings.len();
        for finding in findings {
            *self.by_kind.entry(finding.kind).or_insert(0) += 1;
        }
    }

    /// Percentage of checked files importing the sanctioned package.
    ///
    /// Returns `None` when no files were checked.
    #[must_use]
    // File counts stay far below 2^52, and the rounded ratio lies in 0..=100.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compliance_percent(&self) -> Option<u32> {
        if self.files_checked == 0 {
            return None;
        }
        let ratio = self.files_using_import as f64 / self.files_checked as f64;
        Some((ratio * 100.0).round() as u32)
    }

    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        self.total_findings == 0
    }
}
