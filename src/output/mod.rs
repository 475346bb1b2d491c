mod error_output;
mod json;
mod path;
mod text;

pub use error_output::{ErrorOutput, print_error_full};
pub use json::JsonFormatter;
pub use path::display_path;
pub use text::TextFormatter;

use std::path::Path;

use crate::checker::{ComplianceSummary, FileResult};
use crate::error::Result;

/// Everything a formatter needs to render one run.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Directory that was walked.
    pub root: &'a Path,
    /// Paths are displayed relative to this directory when possible.
    pub project_root: Option<&'a Path>,
    pub results: &'a [FileResult],
    pub summary: &'a ComplianceSummary,
    pub fail_on_unreadable: bool,
}

impl Report<'_> {
    /// Whether the run passes: no findings, and no unreadable files when
    /// those are configured to fail.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.summary.is_compliant()
            && !(self.fail_on_unreadable && self.summary.files_unreadable > 0)
    }

    #[must_use]
    pub fn display(&self, path: &Path) -> String {
        display_path(path, self.project_root)
    }
}

/// Trait for formatting check results into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against stdout.
    #[must_use]
    pub fn for_stdout(self) -> bool {
        self.resolve(std::io::IsTerminal::is_terminal(&std::io::stdout()))
    }

    /// Resolve against stderr.
    #[must_use]
    pub fn for_stderr(self) -> bool {
        self.resolve(std::io::IsTerminal::is_terminal(&std::io::stderr()))
    }

    fn resolve(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // https://no-color.org: presence of the variable disables color
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
