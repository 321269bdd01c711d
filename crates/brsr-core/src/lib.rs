//! # brsr-core — Foundational Types for the BRSR Disclosure Stack
//!
//! This crate is the bedrock of the stack. It defines the type-system
//! primitives every other crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed section universe.** [`SectionKey`] is an exhaustive enum over
//!    the BRSR report sections. An unknown section name cannot exist past
//!    the string boundary — `from_str` rejects it with a
//!    [`ValidationError`], and everything downstream matches exhaustively.
//!
//! 2. **First-class field paths.** [`FieldPath`] models a dotted address
//!    (`sa_markets_served.locations.national_states`) as an ordered list of
//!    string/index segments so that addressing into objects and arrays is
//!    uniform. No bare strings for paths.
//!
//! 3. **Newtype identifiers.** [`ReportId`] and [`RowId`] are UUID newtypes —
//!    you cannot pass one where the other is expected.
//!
//! 4. **Single canonicalization path.** Submission digests flow through
//!    [`CanonicalBytes::new()`] exclusively. No raw `serde_json::to_vec()`
//!    for digest input.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `brsr-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod path;
pub mod section;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, ValidationError};
pub use identity::{ReportId, RowId};
pub use path::{FieldPath, PathSegment};
pub use section::SectionKey;
