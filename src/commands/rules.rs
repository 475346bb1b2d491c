use std::fmt::Write;

use serde::Serialize;

use crate::checker::FindingKind;
use crate::cli::{Cli, RulesArgs};
use crate::output::{OutputFormat, print_error_full};
use crate::rules::{
    FORBIDDEN_PATTERNS, GENERIC_SUGGESTION, SANCTIONED_COMPONENTS, SANCTIONED_IMPORT,
    SANCTIONED_PACKAGE, SUGGESTIONS,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::write_output;

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(e.error_type(), &e.to_string(), None, e.suggestion());
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> crate::Result<()> {
    let rendered = format_rules(args.format)?;
    write_output(None, &rendered, cli.quiet)
}

#[derive(Serialize)]
struct RuleSet {
    package: &'static str,
    import_pattern: &'static str,
    finding_kinds: Vec<&'static str>,
    forbidden_patterns: Vec<PatternEntry>,
    suggestions: Vec<SuggestionEntry>,
    generic_suggestion: &'static str,
    components: &'static [&'static str],
}

#[derive(Serialize)]
struct PatternEntry {
    name: &'static str,
    description: &'static str,
    pattern: &'static str,
}

#[derive(Serialize)]
struct SuggestionEntry {
    contains: &'static str,
    suggestion: &'static str,
}

fn rule_set() -> RuleSet {
    RuleSet {
        package: SANCTIONED_PACKAGE,
        import_pattern: SANCTIONED_IMPORT.as_str(),
        finding_kinds: FindingKind::all().into_iter().map(FindingKind::as_str).collect(),
        forbidden_patterns: FORBIDDEN_PATTERNS
            .iter()
            .map(|p| PatternEntry {
                name: p.name,
                description: p.description,
                pattern: p.regex.as_str(),
            })
            .collect(),
        suggestions: SUGGESTIONS
            .iter()
            .map(|&(contains, suggestion)| SuggestionEntry {
                contains,
                suggestion,
            })
            .collect(),
        generic_suggestion: GENERIC_SUGGESTION,
        components: &SANCTIONED_COMPONENTS,
    }
}

/// Render the compiled-in rule set.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_rules(format: OutputFormat) -> crate::Result<String> {
    let rules = rule_set();
    match format {
        OutputFormat::Text => Ok(format_rules_text(&rules)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&rules)?)),
    }
}

fn format_rules_text(rules: &RuleSet) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sanctioned package: {}", rules.package);
    let _ = writeln!(out, "Import pattern: {}", rules.import_pattern);
    out.push('\n');

    out.push_str("Forbidden patterns:\n");
    for entry in &rules.forbidden_patterns {
        let _ = writeln!(
            out,
            "  {:<14} {:<24} {}",
            entry.name, entry.description, entry.pattern
        );
    }
    out.push('\n');

    out.push_str("Suggestions (first match wins):\n");
    for entry in &rules.suggestions {
        let _ = writeln!(out, "  {:<14} {}", entry.contains, entry.suggestion);
    }
    let _ = writeln!(out, "  {:<14} {}", "(other)", rules.generic_suggestion);
    out.push('\n');

    let _ = writeln!(out, "Sanctioned components ({}):", rules.components.len());
    for chunk in rules.components.chunks(6) {
        let _ = writeln!(out, "  {}", chunk.join(", "));
    }
    out.push('\n');

    let _ = writeln!(out, "Finding kinds: {}", rules.finding_kinds.join(", "));
    out
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
