//! # Canonical Serialization
//!
//! Defines [`CanonicalBytes`], the sole construction path for bytes used in
//! submission-digest computation.
//!
//! ## Invariant
//!
//! The inner `Vec<u8>` is private. The only way to construct
//! `CanonicalBytes` is through [`CanonicalBytes::new()`], which applies the
//! normalization pipeline before serialization. Two submissions with the
//! same disclosure content therefore always digest identically, regardless
//! of key order or timestamp formatting in the caller's data.
//!
//! ## Normalization Rules
//!
//! 1. Object keys sorted lexicographically.
//! 2. RFC 3339 datetime strings normalized to UTC with `Z` suffix,
//!    truncated to seconds.
//! 3. Compact separators (no whitespace).

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY constructor. All digest computation in the stack
    /// must flow through here.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let normalized = normalize_value(value);
        let bytes = serde_json::to_vec(&normalized)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively normalize a JSON value for canonical serialization.
///
/// `serde_json::Map` is a `BTreeMap` under the default feature set, so
/// rebuilding every object sorts its keys.
fn normalize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = serde_json::Map::new();
            for (k, v) in map {
                normalized.insert(k, normalize_value(v));
            }
            Value::Object(normalized)
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(normalize_value).collect()),
        Value::String(s) => {
            // Datetime normalization: if the string parses as RFC 3339,
            // rewrite as UTC with Z suffix, truncated to seconds.
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                let utc = dt.with_timezone(&chrono::Utc);
                Value::String(utc.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            } else {
                Value::String(s)
            }
        }
        other => other,
    }
}
