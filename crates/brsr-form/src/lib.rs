//! # brsr-form — The Form-State Engine
//!
//! Pure operations over `serde_json::Value` working state. This is the
//! core that every wizard page and every section endpoint runs on:
//!
//! - [`reconcile`] — deep-merge a possibly-partial, possibly-legacy server
//!   payload into a section's canonical default shape.
//! - [`set_path`] / [`get_path`] — single-field edits addressed by
//!   [`FieldPath`][brsr_core::FieldPath], fill-as-you-go.
//! - [`rows`] — add/remove/update one repeated row without disturbing its
//!   siblings, keyed positionally or by stable [`RowId`][brsr_core::RowId].
//!
//! ## Purity Contract
//!
//! Every operation takes its input state by reference and returns a fresh
//! root. Nothing here performs I/O, suspends, or mutates its arguments;
//! malformed server data is absorbed by the reconciler's prefer-default
//! policy (with a `tracing::warn!`), never raised as an error.

pub mod mutate;
pub mod reconcile;
pub mod rows;

pub use mutate::{get_path, set_path};
pub use reconcile::reconcile;
pub use rows::{
    add_row, find_row, remove_row, remove_row_by_id, strip_row_ids, tag_rows, update_row_field,
    update_row_field_by_id, RowEditError, ROW_ID_KEY,
};
