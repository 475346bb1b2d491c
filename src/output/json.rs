use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::{FileOutcome, FileResult, Finding, FindingKind};
use crate::error::Result;

use super::{OutputFormatter, Report};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    root: String,
    passed: bool,
    summary: Summary<'a>,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct Summary<'a> {
    files_checked: usize,
    files_using_import: usize,
    total_findings: usize,
    files_failed: usize,
    files_unreadable: usize,
    compliance_percent: Option<u32>,
    by_kind: &'a IndexMap<FindingKind, usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Compliant,
    Failed,
    Unreadable,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    status: Status,
    uses_import: bool,
    findings: &'a [Finding],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let summary = report.summary;

        let output = JsonOutput {
            root: report.display(report.root),
            passed: report.passed(),
            summary: Summary {
                files_checked: summary.files_checked,
                files_using_import: summary.files_using_import,
                total_findings: summary.total_findings,
                files_failed: summary.files_failed,
                files_unreadable: summary.files_unreadable,
                compliance_percent: summary.compliance_percent(),
                by_kind: &summary.by_kind,
            },
            files: report
                .results
                .iter()
                .map(|r| convert_result(report, r))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result<'a>(report: &Report<'_>, result: &'a FileResult) -> JsonFile<'a> {
    let status = match &result.outcome {
        FileOutcome::Checked { findings, .. } if findings.is_empty() => Status::Compliant,
        FileOutcome::Checked { .. } => Status::Failed,
        FileOutcome::Unreadable { .. } => Status::Unreadable,
    };

    JsonFile {
        path: report.display(result.path()),
        status,
        uses_import: result.uses_import(),
        findings: result.findings(),
        error: result.unreadable_reason(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
