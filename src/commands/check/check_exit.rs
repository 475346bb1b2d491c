use crate::output::Report;
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS};

/// Exit code for a finished run: success only when the report passes.
#[must_use]
pub const fn determine_exit_code(report: &Report<'_>) -> i32 {
    if report.passed() {
        EXIT_SUCCESS
    } else {
        EXIT_VIOLATIONS
    }
}
