use std::path::Path;

use crate::rules::{
    FORBIDDEN_PATTERNS, OPENING_TAG, classify_suggestion, excerpt, has_sanctioned_import,
    is_sanctioned_component, uses_sanctioned_component,
};

use super::{Checker, FileResult, Finding};

/// Evaluates the compiled-in rule set against raw file content.
///
/// Evaluation is a pure function of the content: the same text always yields
/// the same findings in the same order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleEvaluator;

impl RuleEvaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run all rules and return findings in rule evaluation order.
    #[must_use]
    pub fn evaluate(&self, content: &str) -> Vec<Finding> {
        let has_import = has_sanctioned_import(content);

        let mut findings = Self::forbidden_markup(content);

        if !has_import && uses_sanctioned_component(content) {
            findings.push(Finding::missing_import());
        }

        // Repeats the whole-file import check per tag occurrence; both counts
        // feed the total that decides the exit code.
        if !has_import {
            findings.extend(Self::unimported_tags(content));
        }

        findings
    }

    fn forbidden_markup(content: &str) -> Vec<Finding> {
        FORBIDDEN_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.regex.find_iter(content))
            .map(|m| {
                let text = m.as_str();
                Finding::forbidden_html(excerpt(text), classify_suggestion(text))
            })
            .collect()
    }

    fn unimported_tags(content: &str) -> impl Iterator<Item = Finding> + '_ {
        OPENING_TAG
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str())
            .filter(|name| is_sanctioned_component(name))
            .map(Finding::component_import_missing)
    }
}

impl Checker for RuleEvaluator {
    fn check(&self, path: &Path, content: &str) -> FileResult {
        FileResult::checked(
            path.to_path_buf(),
            self.evaluate(content),
            has_sanctioned_import(content),
        )
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
