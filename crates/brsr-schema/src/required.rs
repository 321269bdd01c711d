//! # Required-Field Checks
//!
//! A declarative description of what "complete" means for a section. Each
//! check names a path, a display label for the checklist, and the rule
//! applied at that path.

use serde::{Deserialize, Serialize};

/// The rule applied to a required path.
///
/// The two kinds deliberately treat zero and `false` differently — the
/// asymmetry is part of the contract (see DESIGN.md):
///
/// - [`CheckKind::Filled`]: zero and `false` count as *present*. The field
///   was answered, even if the answer is "none".
/// - [`CheckKind::AnyTruthyLeaf`]: zero and `false` do NOT count. An
///   all-zero sub-object is an untouched form page, not a disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// The path exists and is non-empty: a non-empty string, an array with
    /// at least one element, an object with at least one key, or any
    /// number/boolean.
    Filled,
    /// The addressed sub-object has at least one truthy leaf anywhere in
    /// its subtree: a non-empty string, a non-zero number, or `true`.
    AnyTruthyLeaf,
}

/// One required-field rule for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequiredCheck {
    /// Dotted path into the section's data.
    pub path: &'static str,
    /// Label shown on the completion checklist when the check fails.
    pub label: &'static str,
    /// The rule applied at `path`.
    pub kind: CheckKind,
}

impl RequiredCheck {
    /// Declare a [`CheckKind::Filled`] rule.
    pub const fn filled(path: &'static str, label: &'static str) -> Self {
        Self {
            path,
            label,
            kind: CheckKind::Filled,
        }
    }

    /// Declare a [`CheckKind::AnyTruthyLeaf`] rule.
    pub const fn any_truthy(path: &'static str, label: &'static str) -> Self {
        Self {
            path,
            label,
            kind: CheckKind::AnyTruthyLeaf,
        }
    }
}
