use std::fmt;

use serde::Serialize;

/// Category of a compliance finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Raw HTML or ad-hoc markup that a sanctioned component replaces.
    ForbiddenHtml,
    /// Whole-file: sanctioned components used without the package import.
    MissingImport,
    /// Per-tag: one sanctioned component occurrence without the package import.
    ComponentImportMissing,
}

impl FindingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForbiddenHtml => "forbidden_html",
            Self::MissingImport => "missing_import",
            Self::ComponentImportMissing => "component_import_missing",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [
            Self::ForbiddenHtml,
            Self::MissingImport,
            Self::ComponentImportMissing,
        ]
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation within one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    /// Bounded snippet of the offending text (empty for whole-file findings).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub excerpt: String,
    pub message: String,
    pub suggestion: String,
}

impl Finding {
    #[must_use]
    pub fn forbidden_html(excerpt: &str, suggestion: &str) -> Self {
        Self {
            kind: FindingKind::ForbiddenHtml,
            excerpt: excerpt.to_string(),
            message: format!("Forbidden HTML/custom element found: {excerpt}..."),
            suggestion: suggestion.to_string(),
        }
    }

    #[must_use]
    pub fn missing_import() -> Self {
        Self {
            kind: FindingKind::MissingImport,
            excerpt: String::new(),
            message: "File uses stng-react components but missing import statement".to_string(),
            suggestion: "Add: import { Button, Input, Card, ... } from 'stng-react'".to_string(),
        }
    }

    #[must_use]
    pub fn component_import_missing(component: &str) -> Self {
        Self {
            kind: FindingKind::ComponentImportMissing,
            excerpt: component.to_string(),
            message: format!("Using {component} but missing stng-react import"),
            suggestion: format!("Import {component} from 'stng-react'"),
        }
    }
}
