mod evaluator;
mod finding;
mod result;
mod summary;

pub use evaluator::RuleEvaluator;
pub use finding::{Finding, FindingKind};
pub use result::{FileOutcome, FileResult};
pub use summary::ComplianceSummary;

use std::path::Path;

pub trait Checker {
    /// Evaluate one file's full text content.
    fn check(&self, path: &Path, content: &str) -> FileResult;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
