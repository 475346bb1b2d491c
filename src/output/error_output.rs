//! Colored diagnostics on stderr.
//!
//! Format: `✖ Error Type: message` or `⚠ Warning: message`, followed by an
//! optional `  × detail` line and an optional `  help: suggestion` line.

use std::io::Write;

use super::{ColorMode, ansi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

/// Error and warning formatter for stderr.
#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.for_stderr(),
        }
    }

    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_error(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail, suggestion);
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write(w, Level::Error, error_type, message, detail, suggestion);
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write(w, Level::Warning, "Warning", message, detail, suggestion);
    }

    // Write failures on stderr are ignored; there is nowhere left to report them.
    fn write<W: Write>(
        &self,
        w: &mut W,
        level: Level,
        headline: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let (icon, color) = match level {
            Level::Error => ("✖", ansi::RED),
            Level::Warning => ("⚠", ansi::YELLOW),
        };

        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{color}{icon} {headline}:{} {message}",
                ansi::BOLD,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{icon} {headline}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints an error with detail and suggestion using auto-detected color.
pub fn print_error_full(
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    ErrorOutput::stderr().print_error(error_type, message, detail, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
