use std::fmt::Write;

use crate::checker::{FileOutcome, FileResult};
use crate::error::Result;
use crate::rules::SANCTIONED_PACKAGE;

use super::{ColorMode, OutputFormatter, Report, ansi};

/// Human-readable console report.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.for_stdout(),
            verbose,
        }
    }

    #[cfg(test)]
    pub const fn plain(verbose: u8) -> Self {
        Self {
            use_colors: false,
            verbose,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_result(&self, report: &Report<'_>, result: &FileResult, out: &mut String) {
        let path = report.display(result.path());

        match &result.outcome {
            FileOutcome::Checked { findings, .. } if findings.is_empty() => {
                let line = format!("✅ {path} - Compliant with {SANCTIONED_PACKAGE}");
                let _ = writeln!(out, "{}", self.paint(&line, ansi::GREEN));
            }
            FileOutcome::Checked { findings, .. } => {
                let _ = writeln!(out, "{}", self.paint(&format!("❌ {path}:"), ansi::RED));
                for finding in findings {
                    if self.verbose > 0 {
                        let _ = writeln!(out, "   • [{}] {}", finding.kind, finding.message);
                    } else {
                        let _ = writeln!(out, "   • {}", finding.message);
                    }
                    let _ = writeln!(out, "     💡 {}", finding.suggestion);
                }
                out.push('\n');
            }
            FileOutcome::Unreadable { reason } => {
                let line = format!("⚠️  {path} - Could not be read: {reason}");
                let _ = writeln!(out, "{}", self.paint(&line, ansi::YELLOW));
            }
        }
    }

    fn format_summary(&self, report: &Report<'_>, out: &mut String) {
        let summary = report.summary;

        let _ = writeln!(out, "\n📊 {SANCTIONED_PACKAGE} Compliance Summary:");
        let _ = writeln!(out, "Files checked: {}", summary.files_checked);
        let _ = writeln!(
            out,
            "Files using {SANCTIONED_PACKAGE}: {}",
            summary.files_using_import
        );
        let total = summary.total_findings.to_string();
        let total = if summary.total_findings == 0 {
            self.paint(&total, ansi::GREEN)
        } else {
            self.paint(&total, ansi::RED)
        };
        let _ = writeln!(out, "Total issues: {total}");
        if summary.files_unreadable > 0 {
            let _ = writeln!(out, "Files unreadable: {}", summary.files_unreadable);
        }
        match summary.compliance_percent() {
            Some(percent) => {
                let _ = writeln!(out, "Compliance rate: {percent}%");
            }
            None => {
                let _ = writeln!(out, "Compliance rate: 0% (no files checked)");
            }
        }

        if self.verbose > 0 && summary.total_findings > 0 {
            let _ = writeln!(out, "Issues by kind:");
            for (kind, count) in &summary.by_kind {
                let _ = writeln!(out, "  {kind}: {count}");
            }
        }

        let unreadable = summary.files_unreadable;
        if report.passed() && unreadable == 0 {
            let _ = writeln!(
                out,
                "🎉 All files comply with {SANCTIONED_PACKAGE} component library!"
            );
            let _ = writeln!(
                out,
                "🏆 Your team is maintaining perfect design system consistency!"
            );
        } else if report.passed() {
            let noun = if unreadable == 1 { "file" } else { "files" };
            let _ = writeln!(
                out,
                "\n⚠️  Passed with {unreadable} unreadable {noun}; they were not checked."
            );
        } else if summary.total_findings > 0 {
            let _ = writeln!(
                out,
                "\n⚠️  Please fix the issues above to ensure {SANCTIONED_PACKAGE} compliance."
            );
            let _ = writeln!(
                out,
                "📚 Refer to docs/lovable-designer-guide.md for approved {SANCTIONED_PACKAGE} patterns."
            );
            let _ = writeln!(
                out,
                "🔧 Replace HTML elements with {SANCTIONED_PACKAGE} components."
            );
        } else {
            let _ = writeln!(
                out,
                "\n⚠️  Some files could not be read; fix their permissions or encoding."
            );
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "🔍 Validating {SANCTIONED_PACKAGE} component library compliance...\n"
        );

        for result in report.results {
            self.format_result(report, result, &mut out);
        }

        self.format_summary(report, &mut out);

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
