//! # Report Lifecycle
//!
//! A report is editable in `Draft` and frozen in `Submitted`. Submission is
//! terminal — resubmission of a filed disclosure is a new report, not a
//! state transition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use brsr_core::ReportId;

/// The lifecycle state of a report.
///
/// Serializes as `SCREAMING_SNAKE_CASE` to match the API contract and keep
/// free-form status strings unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Being composed; sections accept edits.
    Draft,
    /// Filed; sections are frozen. Terminal state.
    Submitted,
}

impl ReportStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
        }
    }

    /// Whether section data may still be edited in this state.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by a rejected report operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The report has already been submitted; no further edits or
    /// submissions are accepted.
    #[error("report {id} has already been submitted")]
    AlreadySubmitted {
        /// The report in question.
        id: ReportId,
    },

    /// Submission was attempted while required sections are incomplete.
    #[error("report {id} is incomplete: {}", .missing_sections.join(", "))]
    Incomplete {
        /// The report in question.
        id: ReportId,
        /// Titles of the sections failing their completion checks.
        missing_sections: Vec<String>,
    },

    /// The caller's `expected_version` no longer matches the stored
    /// section — another writer got there first.
    #[error("section '{section}' of report {id} is at version {actual}, expected {expected}")]
    VersionConflict {
        /// The report in question.
        id: ReportId,
        /// The section's wire name.
        section: String,
        /// The version the caller expected.
        expected: u64,
        /// The version actually stored.
        actual: u64,
    },
}
