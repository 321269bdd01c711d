//! # Error Types
//!
//! Errors raised at the string boundary of the core types. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The form engine itself (reconcile / mutate / evaluate) is total over
//! well-typed input and defines no error type of its own — malformed server
//! data is absorbed by the reconciler's prefer-default policy, not raised.

use thiserror::Error;

/// Validation failure constructing a core type from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A section name that is not part of the BRSR report universe.
    /// Requesting a shape for such a key is a caller bug, surfaced loudly
    /// at the boundary rather than masked.
    #[error("unknown section key: '{0}'")]
    UnknownSectionKey(String),

    /// A field path with no segments.
    #[error("field path must contain at least one segment")]
    EmptyPath,

    /// A field path segment that is empty (e.g. `a..b` or a trailing dot).
    #[error("field path '{path}' contains an empty segment")]
    EmptySegment {
        /// The full path as given by the caller.
        path: String,
    },
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
