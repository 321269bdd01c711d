//! # Submission Receipts
//!
//! At submit time the full disclosure payload — every section, stripped of
//! working-state row IDs — is canonicalized and digested. The digest is the
//! filer's receipt: recomputing it over the persisted payload proves the
//! filed content has not drifted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use brsr_core::{sha256_digest, CanonicalBytes, CanonicalizationError, ContentDigest, ReportId};
use brsr_form::strip_row_ids;

/// The receipt returned to the filer on successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// The submitted report.
    pub report_id: ReportId,
    /// Canonical SHA-256 digest of the submitted disclosure content.
    pub digest: ContentDigest,
    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Build a receipt over the report's section payloads.
    ///
    /// `sections` maps wire section names to their saved data. Row IDs are
    /// stripped before digesting — working-state identity is not part of
    /// the filed content.
    pub fn compute(
        report_id: ReportId,
        sections: &serde_json::Map<String, Value>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, CanonicalizationError> {
        let stripped = strip_row_ids(&Value::Object(sections.clone()));
        let bytes = CanonicalBytes::new(&stripped)?;
        Ok(Self {
            report_id,
            digest: sha256_digest(&bytes),
            submitted_at,
        })
    }
}
