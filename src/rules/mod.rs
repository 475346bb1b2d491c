//! Compiled-in rule tables for stng-react compliance.
//!
//! The tables are process-wide and immutable. Pattern text and ordering are part
//! of the observable contract: every non-overlapping match of every forbidden
//! pattern becomes one finding, so changing a pattern changes finding counts.

use std::sync::LazyLock;

use regex::Regex;

/// Package that sanctioned components must be imported from.
pub const SANCTIONED_PACKAGE: &str = "stng-react";

/// Default file extensions for markup-bearing sources.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["tsx", "jsx"];

/// Component names provided by the sanctioned library.
pub const SANCTIONED_COMPONENTS: [&str; 27] = [
    "Button",
    "Input",
    "Textarea",
    "Select",
    "SelectItem",
    "Checkbox",
    "Radio",
    "RadioGroup",
    "Card",
    "CardHeader",
    "CardContent",
    "CardFooter",
    "Badge",
    "Avatar",
    "Modal",
    "ModalHeader",
    "ModalContent",
    "ModalFooter",
    "Alert",
    "Spinner",
    "Progress",
    "Switch",
    "Tabs",
    "TabsList",
    "TabsTrigger",
    "TabsContent",
    "Tooltip",
];

/// Maximum number of characters of matched text quoted in a finding message.
pub const EXCERPT_MAX_CHARS: usize = 50;

/// A disallowed low-level markup construct.
#[derive(Debug)]
pub struct ForbiddenPattern {
    /// Stable identifier shown by `stng-guard rules`.
    pub name: &'static str,
    pub description: &'static str,
    pub regex: Regex,
}

impl ForbiddenPattern {
    fn new(name: &'static str, description: &'static str, pattern: &str) -> Self {
        Self {
            name,
            description,
            regex: Regex::new(pattern).expect("Invalid regex"),
        }
    }
}

/// Forbidden patterns in evaluation order.
pub static FORBIDDEN_PATTERNS: LazyLock<Vec<ForbiddenPattern>> = LazyLock::new(|| {
    vec![
        ForbiddenPattern::new("raw-button", "HTML button elements", r"<button[^>]*>"),
        ForbiddenPattern::new("raw-input", "HTML input elements", r"<input[^>]*>"),
        ForbiddenPattern::new("raw-textarea", "HTML textarea elements", r"<textarea[^>]*>"),
        ForbiddenPattern::new("raw-select", "HTML select elements", r"<select[^>]*>"),
        ForbiddenPattern::new(
            "btn-class",
            "Custom button classes",
            r#"className="[^"]*btn-[^"]*""#,
        ),
        ForbiddenPattern::new("inline-style", "Inline styles", r"style=\{\{[^}]*\}\}"),
        ForbiddenPattern::new(
            "card-div",
            "Custom card divs",
            r#"<div[^>]*className="[^"]*card[^"]*""#,
        ),
    ]
});

/// Matches `import { ... } from 'stng-react'` (either quote style).
pub static SANCTIONED_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+\{[^}]*\}\s+from\s+['"]stng-react['"]"#).expect("Invalid regex")
});

/// Generic opening tag; group 1 is the ASCII tag name.
pub static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z0-9_]+)(?:\s+[^>]*)?\s*/?>").expect("Invalid regex")
});

/// Suggestion classes, in the priority order used to classify matched text.
pub const SUGGESTIONS: [(&str, &str); 6] = [
    ("<button", "Use <Button> from stng-react instead of HTML button"),
    ("<input", "Use <Input> from stng-react instead of HTML input"),
    ("<textarea", "Use <Textarea> from stng-react instead of HTML textarea"),
    ("<select", "Use <Select> from stng-react instead of HTML select"),
    ("btn-", "Use <Button> component from stng-react with variant prop"),
    ("card", "Use <Card> component from stng-react instead of custom div"),
];

pub const GENERIC_SUGGESTION: &str = "Use stng-react components instead of custom implementations";

/// Pick the remediation for a forbidden match; first matching class wins.
#[must_use]
pub fn classify_suggestion(matched: &str) -> &'static str {
    SUGGESTIONS
        .iter()
        .find(|(needle, _)| matched.contains(needle))
        .map_or(GENERIC_SUGGESTION, |(_, suggestion)| suggestion)
}

#[must_use]
pub fn is_sanctioned_component(name: &str) -> bool {
    SANCTIONED_COMPONENTS.contains(&name)
}

/// True when the content contains an import from the sanctioned package.
#[must_use]
pub fn has_sanctioned_import(content: &str) -> bool {
    SANCTIONED_IMPORT.is_match(content)
}

/// True when the content opens at least one sanctioned component tag.
///
/// The tag name must match exactly and be followed by whitespace or `>`, so
/// `<ButtonGroup>` does not count as `<Button`.
#[must_use]
pub fn uses_sanctioned_component(content: &str) -> bool {
    SANCTIONED_COMPONENTS.iter().any(|component| {
        let needle = format!("<{component}");
        content.match_indices(&needle).any(|(idx, _)| {
            content[idx + needle.len()..]
                .chars()
                .next()
                .is_some_and(|c| c == '>' || c.is_whitespace())
        })
    })
}

/// First `EXCERPT_MAX_CHARS` characters of `text`.
#[must_use]
pub fn excerpt(text: &str) -> &str {
    text.char_indices()
        .nth(EXCERPT_MAX_CHARS)
        .map_or(text, |(idx, _)| &text[..idx])
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
