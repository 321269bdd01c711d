//! # brsr-cli — CLI Tool for the BRSR Disclosure Stack
//!
//! Provides the `brsr` command-line interface for working with disclosure
//! payloads offline: inspecting canonical shapes, reconciling saved
//! payload files, and running the completion checklist.
//!
//! ## Subcommands
//!
//! - `brsr shape` — print a section's canonical default shape.
//! - `brsr reconcile` — merge a saved payload file against its canonical
//!   shape and print the working state.
//! - `brsr checklist` — evaluate a full report file and print the
//!   per-section completion checklist.
//!
//! ## Exit Codes
//!
//! `0` on success, `1` on a failed checklist, `2` on operational errors
//! (unreadable files, malformed JSON, unknown section names).

pub mod checklist;
pub mod reconcile;
pub mod shape;
