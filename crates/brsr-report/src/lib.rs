//! # brsr-report — Report Domain Logic
//!
//! The layer between the form engine and the API surface:
//!
//! - [`status`] — the report lifecycle (`Draft` → `Submitted`, terminal)
//!   and the errors a rejected transition raises.
//! - [`completion`] — the Section-Completion Evaluator: declarative
//!   required-field checks over reconciled section data, assembled into the
//!   per-report checklist that gates submission.
//! - [`submission`] — submission receipts: the canonical SHA-256 digest of
//!   the full disclosure payload, computed once at submit time.
//!
//! Everything here is pure over its inputs; persistence and transport live
//! in `brsr-api`.

pub mod completion;
pub mod status;
pub mod submission;

pub use completion::{evaluate, report_checklist, CompletionRecord, ReportChecklist};
pub use status::{ReportError, ReportStatus};
pub use submission::SubmissionReceipt;
